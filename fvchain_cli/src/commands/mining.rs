use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::Client;

use crate::output::{print_record, OutputFormat};

#[derive(Args)]
pub struct MiningArgs {
    #[command(subcommand)]
    pub command: MiningCommand,
}

#[derive(Subcommand)]
pub enum MiningCommand {
    /// Show the mining status of a device
    Status {
        /// Device ID
        device_id: String,
    },
    /// Send a mining heartbeat
    Heartbeat {
        /// Device ID (generated if omitted)
        #[arg(long)]
        device_id: Option<String>,

        /// Session token (generated if omitted)
        #[arg(long)]
        session_token: Option<String>,

        /// Unix timestamp (defaults to now)
        #[arg(long)]
        timestamp: Option<i64>,
    },
    /// Show mining detection statistics
    Stats,
}

pub async fn run(args: &MiningArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        MiningCommand::Status { device_id } => {
            let status = client.get_miner_status(device_id).await?;
            print_record(&status, format)?;
        }
        MiningCommand::Heartbeat {
            device_id,
            session_token,
            timestamp,
        } => {
            let device_id = device_id
                .clone()
                .unwrap_or_else(|| client.generate_device_id());
            let session_token = session_token
                .clone()
                .unwrap_or_else(|| client.generate_session_token());
            eprintln!("Heartbeat for {} ({})", device_id, session_token);
            let resp = client
                .send_mining_heartbeat(&device_id, &session_token, *timestamp)
                .await?;
            print_record(&resp, format)?;
        }
        MiningCommand::Stats => {
            let stats = client.get_mining_stats().await?;
            print_record(&stats, format)?;
        }
    }
    Ok(())
}
