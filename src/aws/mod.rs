use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use tracing::info;

use crate::constants::DEFAULT_AWS_REGION;

pub mod iam;
pub mod sns;
pub mod sts;

/// IAM user as returned by the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IamUser {
    pub name: String,
}

/// Access key status as reported by IAM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStatus {
    Active,
    Inactive,
    Other(String),
}

impl KeyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            KeyStatus::Active => "Active",
            KeyStatus::Inactive => "Inactive",
            KeyStatus::Other(value) => value,
        }
    }
}

impl From<&str> for KeyStatus {
    fn from(value: &str) -> Self {
        match value {
            "Active" => KeyStatus::Active,
            "Inactive" => KeyStatus::Inactive,
            other => KeyStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KeyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Access key metadata belonging to one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKey {
    pub user_name: String,
    pub access_key_id: String,
    pub status: KeyStatus,
    pub created_at: DateTime<Utc>,
}

/// Read access to the users and access keys of one account
#[async_trait]
pub trait CredentialInventory: Send + Sync {
    /// List every user in the account
    async fn list_users(&self) -> Result<Vec<IamUser>>;

    /// List every access key owned by `user_name`
    async fn list_access_keys(&self, user_name: &str) -> Result<Vec<AccessKey>>;
}

/// Channel the audit report is delivered through
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<()>;
}

/// Load shared AWS config for `profile`, falling back to DEFAULT_AWS_REGION
/// when neither the environment nor the profile names a region.
pub async fn load_sdk_config(profile: Option<&str>) -> SdkConfig {
    let loader = || {
        let loader = aws_config::defaults(BehaviorVersion::latest());
        match profile {
            Some(name) => loader.profile_name(name),
            None => loader,
        }
    };

    let loaded = loader().load().await;
    match loaded.region() {
        Some(region) => {
            info!("Using region: {}", region);
            loaded
        }
        None => {
            info!("No region configured, using default {}", DEFAULT_AWS_REGION);
            loader()
                .region(Region::new(DEFAULT_AWS_REGION))
                .load()
                .await
        }
    }
}

/// Production collaborators built from one shared SDK config
pub struct AwsCollaborators {
    pub inventory: iam::IamInventory,
    pub notifier: sns::SnsNotifier,
}

impl AwsCollaborators {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inventory: iam::IamInventory::new(aws_sdk_iam::Client::new(config)),
            notifier: sns::SnsNotifier::new(aws_sdk_sns::Client::new(config)),
        }
    }
}
