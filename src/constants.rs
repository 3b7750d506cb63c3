/// Environment variable holding the human-readable account label
pub const ACCOUNT_NAME_VAR: &str = "ACCOUNT_NAME";

/// Environment variable holding the AWS account id used in the report
pub const ACCOUNT_ID_VAR: &str = "ACCOUNT_ID";

/// Environment variable holding the SNS topic the report is published to
pub const SNS_TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Environment variable holding the key age threshold in days
pub const EXPIRY_DAYS_VAR: &str = "EXPIRY_DAYS";

/// Default AWS region for SDK clients when no region is configured
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Report content used when no key reaches the threshold
pub const NO_EXPIRED_KEYS_MESSAGE: &str = "No expired or expiring keys found.";

/// Status code returned by a successful audit
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// Seconds in one day, used to turn key age into whole days
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Date format used for key creation dates in reports
pub const CREATE_DATE_FORMAT: &str = "%Y-%m-%d";
