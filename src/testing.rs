//! In-memory collaborators for workflow tests.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::aws::{AccessKey, CredentialInventory, IamUser, KeyStatus, Notifier};
use crate::config::Config;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub fn test_config(expiry_days: u32) -> Config {
    Config {
        account_name: "prod".to_string(),
        account_id: "123456789012".to_string(),
        topic_arn: "arn:aws:sns:us-east-1:123456789012:key-expiry".to_string(),
        expiry_days,
    }
}

pub fn key_aged(user: &str, key_id: &str, age: Duration) -> AccessKey {
    AccessKey {
        user_name: user.to_string(),
        access_key_id: key_id.to_string(),
        status: KeyStatus::Active,
        created_at: fixed_now() - age,
    }
}

#[derive(Default)]
pub struct FakeInventory {
    users: Vec<(String, Vec<AccessKey>)>,
    fail_listing_keys_for: Option<String>,
    fail_listing_users: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, name: &str, keys: Vec<AccessKey>) -> Self {
        self.users.push((name.to_string(), keys));
        self
    }

    pub fn failing_users(mut self) -> Self {
        self.fail_listing_users = true;
        self
    }

    pub fn failing_keys_for(mut self, name: &str) -> Self {
        self.fail_listing_keys_for = Some(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialInventory for FakeInventory {
    async fn list_users(&self) -> Result<Vec<IamUser>> {
        self.calls.lock().unwrap().push("list_users".to_string());
        if self.fail_listing_users {
            bail!("AccessDenied: iam:ListUsers");
        }
        Ok(self
            .users
            .iter()
            .map(|(name, _)| IamUser { name: name.clone() })
            .collect())
    }

    async fn list_access_keys(&self, user_name: &str) -> Result<Vec<AccessKey>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("list_access_keys:{user_name}"));
        if self.fail_listing_keys_for.as_deref() == Some(user_name) {
            bail!("Throttling: rate exceeded");
        }
        Ok(self
            .users
            .iter()
            .find(|(name, _)| name == user_name)
            .map(|(_, keys)| keys.clone())
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub topic: String,
    pub subject: String,
    pub message: String,
}

#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    pub published: Mutex<Vec<Published>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<Published> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<()> {
        self.published.lock().unwrap().push(Published {
            topic: topic.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        });
        if self.fail {
            bail!("AuthorizationError: sns:Publish");
        }
        Ok(())
    }
}
