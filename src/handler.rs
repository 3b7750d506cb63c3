use std::env;

use anyhow::{Context, Result, anyhow};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

use crate::{
    audit::{AuditResult, Auditor},
    config::Config,
};

/// Resolve configuration for one invocation and run the audit.
///
/// Configuration is validated before any inventory or notification call.
pub async fn handle_invocation<F>(
    auditor: &Auditor,
    lookup: F,
    event: &Value,
) -> Result<AuditResult>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup).context("Invalid auditor configuration")?;
    auditor.handle(&config, event).await
}

/// Serve the auditor under the AWS Lambda runtime until the runtime shuts down
pub async fn serve(auditor: Auditor) -> Result<()> {
    let auditor = &auditor;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        info!("Handling invocation {}", event.context.request_id);
        handle_invocation(auditor, |var| env::var(var).ok(), &event.payload)
            .await
            .map_err(lambda_runtime::Error::from)
    }))
    .await
    .map_err(|e| anyhow!("Lambda runtime failed: {e}"))
}
