use anyhow::{Context, Result, bail};
use aws_sdk_sts::Client as StsClient;
use tracing::{debug, info};

/// Return the account id owning the current credentials
pub async fn caller_account_id(client: &StsClient) -> Result<String> {
    info!("Calling AWS STS GetCallerIdentity");

    let response = client
        .get_caller_identity()
        .send()
        .await
        .context("Failed to get caller identity from AWS STS")?;

    debug!("Caller ARN: {}", response.arn().unwrap_or("unknown"));

    response
        .account()
        .map(str::to_string)
        .context("AWS STS returned no account id")
}

/// Fail unless the credentials belong to `expected_account_id`
pub async fn verify_account(client: &StsClient, expected_account_id: &str) -> Result<()> {
    let actual = caller_account_id(client).await?;
    ensure_same_account(expected_account_id, &actual)?;
    info!("Credentials belong to account {}", actual);
    Ok(())
}

fn ensure_same_account(expected: &str, actual: &str) -> Result<()> {
    if expected.trim() != actual {
        bail!(
            "Credentials belong to account {} but ACCOUNT_ID is {}",
            actual,
            expected
        );
    }
    Ok(())
}
