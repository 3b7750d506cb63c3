use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    aws::{AccessKey, CredentialInventory, KeyStatus, Notifier},
    config::Config,
    constants::{CREATE_DATE_FORMAT, SECONDS_PER_DAY, SUCCESS_STATUS_CODE},
    report::Report,
};

/// One access key at or past the age threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiredKeyRecord {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "AccessKeyId")]
    pub access_key_id: String,
    #[serde(rename = "Status")]
    pub status: KeyStatus,
    #[serde(rename = "CreateDate")]
    pub create_date: String,
    #[serde(rename = "AgeDays")]
    pub age_days: i64,
}

/// Structured outcome of one audit invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub expired_keys_count: usize,
    pub expired_keys: Vec<ExpiredKeyRecord>,
}

impl AuditResult {
    fn success(expired_keys: Vec<ExpiredKeyRecord>) -> Self {
        Self {
            status_code: SUCCESS_STATUS_CODE,
            expired_keys_count: expired_keys.len(),
            expired_keys,
        }
    }
}

/// Whole days between `created_at` and `now`, rounded down
pub fn key_age_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Record for `key` when its age reaches `threshold_days`
pub fn evaluate(
    key: &AccessKey,
    threshold_days: u32,
    now: DateTime<Utc>,
) -> Option<ExpiredKeyRecord> {
    let age_days = key_age_days(key.created_at, now);
    (age_days >= i64::from(threshold_days)).then(|| ExpiredKeyRecord {
        user_name: key.user_name.clone(),
        access_key_id: key.access_key_id.clone(),
        status: key.status.clone(),
        create_date: key.created_at.format(CREATE_DATE_FORMAT).to_string(),
        age_days,
    })
}

/// Scans every user's keys and sends exactly one report per run.
///
/// Any collaborator failure aborts the run before the report is published.
#[derive(Clone)]
pub struct Auditor {
    inventory: Arc<dyn CredentialInventory>,
    notifier: Arc<dyn Notifier>,
}

impl Auditor {
    pub fn new(inventory: Arc<dyn CredentialInventory>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inventory,
            notifier,
        }
    }

    /// Entry point for scheduled or manual triggers. The event payload is ignored.
    pub async fn handle(
        &self,
        config: &Config,
        _event: &serde_json::Value,
    ) -> Result<AuditResult> {
        self.run_at(config, Utc::now()).await
    }

    /// Run the audit evaluating key ages against `now`
    pub async fn run_at(&self, config: &Config, now: DateTime<Utc>) -> Result<AuditResult> {
        info!(
            "Auditing access keys in account {} (threshold: {} days)",
            config.account_id, config.expiry_days
        );

        let expired_keys = self.collect_expired_keys(config.expiry_days, now).await?;
        info!("Found {} expired or expiring key(s)", expired_keys.len());

        let report = Report::build(config, &expired_keys);
        self.notifier
            .publish(&config.topic_arn, &report.subject, &report.body)
            .await?;

        Ok(AuditResult::success(expired_keys))
    }

    async fn collect_expired_keys(
        &self,
        threshold_days: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<ExpiredKeyRecord>> {
        let users = self.inventory.list_users().await?;
        info!("Found {} IAM user(s)", users.len());

        let mut expired = Vec::new();
        for user in &users {
            let keys = self.inventory.list_access_keys(&user.name).await?;
            for key in &keys {
                match evaluate(key, threshold_days, now) {
                    Some(record) => {
                        debug!(
                            "Key {} of {} is {} days old",
                            record.access_key_id, record.user_name, record.age_days
                        );
                        expired.push(record);
                    }
                    None => debug!(
                        "Key {} of {} is within threshold",
                        key.access_key_id, user.name
                    ),
                }
            }
        }

        Ok(expired)
    }
}
