use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::{Client, DEFAULT_LIMIT};

use crate::output::{print_blocks, print_record, OutputFormat};

#[derive(Args)]
pub struct BlocksArgs {
    #[command(subcommand)]
    pub command: BlocksCommand,
}

#[derive(Subcommand)]
pub enum BlocksCommand {
    /// List the most recent blocks
    Latest {
        /// Number of blocks (capped at 100)
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Show one block by height
    Get {
        /// Block height
        height: u64,
    },
}

pub async fn run(args: &BlocksArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match args.command {
        BlocksCommand::Latest { limit } => {
            let blocks = client.get_latest_blocks(limit).await?;
            eprintln!("{} blocks", blocks.len());
            print_blocks(&blocks, format)?;
        }
        BlocksCommand::Get { height } => {
            let block = client.get_block_by_height(height).await?;
            print_record(&block, format)?;
        }
    }
    Ok(())
}
