use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::Client;

use crate::output::{print_record, OutputFormat};

#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Show rate-limiter statistics (admin only)
    RateLimit,
}

pub async fn run(args: &AdminArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match args.command {
        AdminCommand::RateLimit => {
            let stats = client.get_rate_limit_stats().await?;
            print_record(&stats, format)?;
        }
    }
    Ok(())
}
