use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{AuditCommand, LambdaCommand};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "keyage",
    version,
    about = "Report IAM access keys older than a configured number of days",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        global = true,
        help = "AWS profile name (defaults to the SDK credential chain)"
    )]
    pub profile: Option<String>,

    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub audit: AuditCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Audit access key age once and publish the report")]
    Audit(AuditCommand),
    #[command(about = "Run as an AWS Lambda function handler")]
    Lambda(LambdaCommand),
}

impl Cli {
    /// True when the process will serve Lambda invocations
    pub fn is_lambda(&self) -> bool {
        matches!(self.command, Some(Commands::Lambda(_)))
    }

    pub async fn execute(self) -> Result<()> {
        let profile = self.profile;
        let command = self.command.unwrap_or(Commands::Audit(self.audit));

        match command {
            Commands::Audit(cmd) => cmd.execute(profile.as_deref()).await,
            Commands::Lambda(cmd) => cmd.execute(profile.as_deref()).await,
        }
    }
}
