use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::{validate_address, Client};

use crate::output::{print_record, OutputFormat};

#[derive(Args)]
pub struct WalletArgs {
    #[command(subcommand)]
    pub command: WalletCommand,
}

#[derive(Subcommand)]
pub enum WalletCommand {
    /// Create a new wallet on the node (prints the private key)
    Create,
    /// Look up a wallet balance
    Balance {
        /// Wallet address (fvc + 36 hex + emyl)
        address: String,
    },
}

pub async fn run(args: &WalletArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        WalletCommand::Create => {
            let wallet = client.create_wallet().await?;
            eprintln!("Store the private key somewhere safe; the node will not show it again.");
            print_record(&wallet, format)?;
        }
        WalletCommand::Balance { address } => {
            if !validate_address(address) {
                tracing::warn!("{} does not look like an FVChain address", address);
            }
            let wallet = client.get_wallet_balance(address).await?;
            print_record(&wallet, format)?;
        }
    }
    Ok(())
}
