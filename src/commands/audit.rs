use std::sync::Arc;

use anyhow::{Context, Result};
use aws_sdk_sts::Client as StsClient;
use clap::Args;
use serde_json::Value;
use tracing::info;

use crate::{
    audit::{AuditResult, Auditor},
    aws::{self, AwsCollaborators, Notifier, sns::StdoutNotifier},
    config::{Config, ConfigError},
    constants::{ACCOUNT_ID_VAR, ACCOUNT_NAME_VAR, EXPIRY_DAYS_VAR, SNS_TOPIC_ARN_VAR},
    report,
};

#[derive(Debug, Clone, Default, Args)]
pub struct AuditCommand {
    #[arg(long, env = ACCOUNT_NAME_VAR, help = "Account name shown in the report")]
    pub account_name: Option<String>,

    #[arg(long, env = ACCOUNT_ID_VAR, help = "Account id shown in the report")]
    pub account_id: Option<String>,

    #[arg(long, env = SNS_TOPIC_ARN_VAR, help = "SNS topic the report is published to")]
    pub topic_arn: Option<String>,

    #[arg(long, env = EXPIRY_DAYS_VAR, help = "Report keys at least this many days old")]
    pub expiry_days: Option<String>,

    #[arg(long, help = "Print the report instead of publishing it to SNS")]
    pub dry_run: bool,

    #[arg(long, help = "Print the audit result as JSON")]
    pub json: bool,

    #[arg(
        long,
        help = "Fail unless the AWS credentials belong to the configured account"
    )]
    pub verify_account: bool,
}

impl AuditCommand {
    pub async fn execute(self, profile: Option<&str>) -> Result<()> {
        let config = self.config().context("Invalid auditor configuration")?;

        let sdk_config = aws::load_sdk_config(profile).await;

        if self.verify_account {
            aws::sts::verify_account(&StsClient::new(&sdk_config), &config.account_id).await?;
        }

        let collaborators = AwsCollaborators::new(&sdk_config);
        let notifier: Arc<dyn Notifier> = if self.dry_run {
            info!("Dry run: report will be printed instead of published");
            Arc::new(StdoutNotifier)
        } else {
            Arc::new(collaborators.notifier)
        };
        let auditor = Auditor::new(Arc::new(collaborators.inventory), notifier);

        let result = auditor.handle(&config, &Value::Null).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", summary(&config, &result));
        }

        Ok(())
    }

    fn config(&self) -> Result<Config, ConfigError> {
        Config::from_lookup(|var| match var {
            ACCOUNT_NAME_VAR => self.account_name.clone(),
            ACCOUNT_ID_VAR => self.account_id.clone(),
            SNS_TOPIC_ARN_VAR => self.topic_arn.clone(),
            EXPIRY_DAYS_VAR => self.expiry_days.clone(),
            _ => None,
        })
    }
}

fn summary(config: &Config, result: &AuditResult) -> String {
    format!(
        "{} key(s) in account {} are at least {} days old.\n{}",
        result.expired_keys_count,
        config.account_id,
        config.expiry_days,
        report::content(&result.expired_keys)
    )
}
