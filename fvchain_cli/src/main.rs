mod commands;
mod output;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fvchain_api::{Client, ClientConfig, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fvchain")]
#[command(about = "Query a Fractal Vortex Chain node over its RPC API")]
struct Cli {
    /// Node base URL
    #[arg(long, env = "FVCHAIN_URL", default_value = DEFAULT_BASE_URL, global = true)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "FVCHAIN_TIMEOUT", default_value = "10", global = true)]
    timeout: u64,

    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Network status and peers
    Network(commands::network::NetworkArgs),
    /// Recent blocks or one block by height
    Blocks(commands::blocks::BlocksArgs),
    /// Recent transactions or one transaction by hash
    Transactions(commands::transactions::TransactionsArgs),
    /// Create a wallet or look up a balance
    Wallet(commands::wallet::WalletArgs),
    /// Miner status, heartbeats and detection stats
    Mining(commands::mining::MiningArgs),
    /// Admin statistics
    Admin(commands::admin::AdminArgs),
    /// Probe node health
    Health,
    /// Offline helpers: IDs, address check, unit conversion
    Util(commands::util::UtilArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<fvchain_api::Error>() {
                Some(api) => {
                    eprintln!("Error: {}", api.message());
                    if api.status_code() != 0 {
                        eprintln!("Status Code: {}", api.status_code());
                    }
                    eprintln!("Error Code: {}", api.error_code());
                }
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("fvchain=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.output);

    match &cli.command {
        Commands::Util(args) => commands::util::run(args),
        command => {
            let config =
                ClientConfig::new(&cli.url).with_timeout(Duration::from_secs(cli.timeout));
            let client = Client::with_config(config)?;
            tracing::debug!("Using node at {}", client.base_url());
            dispatch(command, &client, &format).await
        }
    }
}

async fn dispatch(command: &Commands, client: &Client, format: &OutputFormat) -> Result<()> {
    match command {
        Commands::Network(args) => commands::network::run(args, client, format).await?,
        Commands::Blocks(args) => commands::blocks::run(args, client, format).await?,
        Commands::Transactions(args) => commands::transactions::run(args, client, format).await?,
        Commands::Wallet(args) => commands::wallet::run(args, client, format).await?,
        Commands::Mining(args) => commands::mining::run(args, client, format).await?,
        Commands::Admin(args) => commands::admin::run(args, client, format).await?,
        Commands::Health => commands::health::run(client, format).await?,
        Commands::Util(args) => commands::util::run(args)?,
    }

    Ok(())
}
