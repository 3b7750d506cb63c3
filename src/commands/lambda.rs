use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::{
    audit::Auditor,
    aws::{self, AwsCollaborators},
    handler,
};

#[derive(Debug, Clone, Args)]
pub struct LambdaCommand {}

impl LambdaCommand {
    pub async fn execute(self, profile: Option<&str>) -> Result<()> {
        // Clients are built once and reused by every warm invocation
        let sdk_config = aws::load_sdk_config(profile).await;
        let collaborators = AwsCollaborators::new(&sdk_config);
        let auditor = Auditor::new(
            Arc::new(collaborators.inventory),
            Arc::new(collaborators.notifier),
        );

        info!("Starting Lambda runtime");
        handler::serve(auditor).await
    }
}
