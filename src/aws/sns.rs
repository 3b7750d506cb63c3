use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use tracing::info;

use super::Notifier;

/// Notifier that publishes to an SNS topic
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: SnsClient,
}

impl SnsNotifier {
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<()> {
        let response = self
            .client
            .publish()
            .topic_arn(topic)
            .subject(subject)
            .message(message)
            .send()
            .await
            .with_context(|| format!("Failed to publish report to SNS topic '{topic}'"))?;

        info!(
            "Published report to {} (message id: {})",
            topic,
            response.message_id().unwrap_or("unknown")
        );
        Ok(())
    }
}

/// Notifier that writes the report to stdout, used for dry runs
#[derive(Debug, Clone, Default)]
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<()> {
        println!("Topic: {topic}");
        println!("Subject: {subject}");
        println!();
        println!("{message}");
        Ok(())
    }
}
