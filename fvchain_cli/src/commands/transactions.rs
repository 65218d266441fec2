use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::{Client, DEFAULT_LIMIT};

use crate::output::{print_record, print_transactions, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    #[command(subcommand)]
    pub command: TransactionsCommand,
}

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// List the most recent transactions
    Latest {
        /// Number of transactions (capped at 200)
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Show one transaction by hash
    Get {
        /// Transaction hash
        hash: String,
    },
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        TransactionsCommand::Latest { limit } => {
            let txs = client.get_latest_transactions(*limit).await?;
            eprintln!("{} transactions", txs.len());
            print_transactions(&txs, format)?;
        }
        TransactionsCommand::Get { hash } => {
            let tx = client.get_transaction_by_hash(hash).await?;
            print_record(&tx, format)?;
        }
    }
    Ok(())
}
