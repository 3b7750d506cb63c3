use std::env;

use thiserror::Error;

use crate::constants::{ACCOUNT_ID_VAR, ACCOUNT_NAME_VAR, EXPIRY_DAYS_VAR, SNS_TOPIC_ARN_VAR};

/// Configuration problems detected before any AWS call is made
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required setting {0} is not set")]
    Missing(&'static str),

    #[error("{var} must be a positive whole number of days, got '{value}'")]
    InvalidThreshold { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub account_name: String,
    pub account_id: String,
    pub topic_arn: String,
    pub expiry_days: u32,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the configuration from an arbitrary key/value source.
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let expiry_days = parse_expiry_days(&required(EXPIRY_DAYS_VAR)?)?;

        Ok(Self {
            account_name: required(ACCOUNT_NAME_VAR)?,
            account_id: required(ACCOUNT_ID_VAR)?,
            topic_arn: required(SNS_TOPIC_ARN_VAR)?,
            expiry_days,
        })
    }
}

fn parse_expiry_days(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| ConfigError::InvalidThreshold {
            var: EXPIRY_DAYS_VAR,
            value: raw.to_string(),
        })
}
