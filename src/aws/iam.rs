use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_iam::{Client as IamClient, types::AccessKeyMetadata};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{AccessKey, CredentialInventory, IamUser, KeyStatus};

/// Inventory backed by the IAM API. Every listing follows all pages.
#[derive(Debug, Clone)]
pub struct IamInventory {
    client: IamClient,
}

impl IamInventory {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CredentialInventory for IamInventory {
    async fn list_users(&self) -> Result<Vec<IamUser>> {
        let users = self
            .client
            .list_users()
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .context("Failed to list IAM users")?;

        Ok(users
            .into_iter()
            .map(|user| IamUser {
                name: user.user_name().to_string(),
            })
            .collect())
    }

    async fn list_access_keys(&self, user_name: &str) -> Result<Vec<AccessKey>> {
        let metadata = self
            .client
            .list_access_keys()
            .user_name(user_name)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .with_context(|| format!("Failed to list access keys for user '{user_name}'"))?;

        debug!("User {} has {} access key(s)", user_name, metadata.len());

        metadata
            .iter()
            .map(|key| access_key_from_metadata(user_name, key))
            .collect()
    }
}

fn access_key_from_metadata(user_name: &str, key: &AccessKeyMetadata) -> Result<AccessKey> {
    let access_key_id = key.access_key_id().with_context(|| {
        format!("IAM returned an access key without an id for user '{user_name}'")
    })?;

    let created = key.create_date().with_context(|| {
        format!("Access key {access_key_id} of user '{user_name}' has no creation date")
    })?;

    let status = key
        .status()
        .map(|s| KeyStatus::from(s.as_str()))
        .with_context(|| {
            format!("Access key {access_key_id} of user '{user_name}' has no status")
        })?;

    Ok(AccessKey {
        user_name: key.user_name().unwrap_or(user_name).to_string(),
        access_key_id: access_key_id.to_string(),
        status,
        created_at: to_utc(created)?,
    })
}

/// Convert an SDK timestamp into a chrono UTC timestamp
pub(crate) fn to_utc(value: &aws_smithy_types::DateTime) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
        .with_context(|| format!("Timestamp out of range: {value}"))
}
