use anyhow::{bail, Result};
use fvchain_api::types::HealthStatus;
use fvchain_api::Client;

use crate::output::{print_record, OutputFormat};

/// Prints the node health report. Fails when the node is unhealthy so the
/// exit status can drive scripts.
pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let health = client.get_server_health().await;
    print_record(&health, format)?;
    if health.status == HealthStatus::Unhealthy {
        bail!("node at {} is unhealthy", client.base_url());
    }
    Ok(())
}
