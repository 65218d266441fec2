use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::Client;

use crate::output::{print_record, OutputFormat};

#[derive(Args)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub command: NetworkCommand,
}

#[derive(Subcommand)]
pub enum NetworkCommand {
    /// Show chain height, active nodes and network identifiers
    Info,
    /// List the node's peers
    Nodes,
}

pub async fn run(args: &NetworkArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match args.command {
        NetworkCommand::Info => {
            let info = client.get_network_info().await?;
            print_record(&info, format)?;
        }
        NetworkCommand::Nodes => {
            let nodes = client.get_network_nodes().await?;
            print_record(&nodes, format)?;
        }
    }
    Ok(())
}
