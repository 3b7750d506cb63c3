use crate::{audit::ExpiredKeyRecord, config::Config, constants::NO_EXPIRED_KEYS_MESSAGE};

/// Notification subject and body for one audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub subject: String,
    pub body: String,
}

impl Report {
    pub fn build(config: &Config, records: &[ExpiredKeyRecord]) -> Self {
        let subject = format!(
            "IAM Access Key Expiry Report - Account {}",
            config.account_id
        );

        let body = format!(
            "AWS Account ID: {}\nAWS Account Name: {}\n\n\
             The following IAM users have expired or expiring access keys (≥{} days old):\n\n{}",
            config.account_id,
            config.account_name,
            config.expiry_days,
            content(records)
        );

        Self { subject, body }
    }
}

/// Record lines joined by newlines, or the "none found" sentinel
pub fn content(records: &[ExpiredKeyRecord]) -> String {
    if records.is_empty() {
        return NO_EXPIRED_KEYS_MESSAGE.to_string();
    }

    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_record(record: &ExpiredKeyRecord) -> String {
    format!(
        "User: {} | KeyId: {} | Status: {} | Created: {} | Age: {} days",
        record.user_name, record.access_key_id, record.status, record.create_date, record.age_days
    )
}
