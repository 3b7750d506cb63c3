//! Audit the age of IAM access keys in one AWS account and report keys at or
//! past a threshold through an SNS topic.
//!
//! [`audit::Auditor`] holds the workflow. It depends only on the
//! [`aws::CredentialInventory`] and [`aws::Notifier`] traits, so the Lambda
//! runtime, the CLI and the tests all drive the same code.

pub mod audit;
pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod handler;
pub mod report;

#[cfg(test)]
mod testing;
