//! HTTP client for the FVChain node RPC API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    clock::{Clock, SystemClock},
    ids,
    query::{BlocksQuery, LimitedQuery, MinerStatusQuery, Query, TransactionsQuery},
    types::{
        BalanceRequest, BalanceResponse, BlocksPage, CreateWalletResponse, HealthStatus,
        HeartbeatRequest, NetworkInfo, ServerHealth, TransactionsPage, WalletInfo,
    },
    user_agent::get_user_agent,
    Error,
};

/// Node address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Construction parameters for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root address of the node. Trailing slashes are removed by [`Client::with_config`].
    pub base_url: String,
    /// Upper bound for each request, connection and body included.
    pub timeout: Duration,
    /// Extra headers, applied over the `Content-Type`/`User-Agent` defaults.
    pub headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn header_map(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(get_user_agent()));
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Request(format!("invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Request(format!("invalid value for header {}: {}", name, e)))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

/// HTTP client for the FVChain node RPC API.
///
/// Holds one `reqwest::Client` built from a [`ClientConfig`]; it can be cloned
/// and shared between tasks. Every call issues a single request with no
/// retries. Failures of any kind come back as [`Error`].
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    clock: Arc<dyn Clock>,
}

impl Client {
    /// Creates a client for the default local node.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client for the given node with default timeout and headers.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", trimmed, e);
            Error::Request(format!("invalid base URL {}: {}", trimmed, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Request(format!("invalid base URL {}", trimmed)));
        }
        let http = reqwest::Client::builder()
            .default_headers(config.header_map()?)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Request(e.to_string())
            })?;
        Ok(Self {
            http,
            base_url,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replaces the time source used for heartbeats, health reports and IDs.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Configured node address, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn get_url(&self, segments: &[&str], query: Option<&dyn Query>) -> Result<Url, Error> {
        // Dot segments would be resolved away and hit a different endpoint.
        if let Some(dot) = segments.iter().find(|s| **s == "." || **s == "..") {
            tracing::error!("Refusing dot path segment {:?}", dot);
            return Err(Error::Request(format!("invalid path segment {:?}", dot)));
        }
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                tracing::error!("Base URL {} cannot take a path", self.base_url);
                Error::Request(format!("invalid base URL {}", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn request<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("{} {}", method, url);
        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::from_transport(&e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from_transport(&e)
        })?;

        if status.as_u16() >= 400 {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::from_status(status.as_u16(), &body));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::JsonDecode
        })
    }

    async fn get<T>(&self, segments: &[&str], query: Option<&dyn Query>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(segments, query)?;
        self.request(Method::GET, url, None).await
    }

    async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.get_url(segments, None)?;
        let body = serde_json::to_value(body).map_err(|e| {
            tracing::error!("Failed to encode request body: {}", e);
            Error::Request(e.to_string())
        })?;
        self.request(Method::POST, url, Some(body)).await
    }

    // -- Network --

    /// Fetches chain height, node count and network identifiers.
    pub async fn get_network_info(&self) -> Result<NetworkInfo, Error> {
        self.get(&["network", "info"], None).await
    }

    /// Fetches the node's peer list as returned by the server.
    pub async fn get_network_nodes(&self) -> Result<serde_json::Value, Error> {
        self.get(&["network", "nodes"], None).await
    }

    // -- Blocks --

    /// Fetches the most recent blocks. `limit` is capped at 100.
    pub async fn get_latest_blocks(&self, limit: u32) -> Result<Vec<serde_json::Value>, Error> {
        let query = BlocksQuery::default().with_limit(limit);
        let page: BlocksPage = self.get(&["blocks", "latest"], Some(&query)).await?;
        Ok(page.blocks)
    }

    /// Fetches one block as returned by the server.
    pub async fn get_block_by_height(&self, height: u64) -> Result<serde_json::Value, Error> {
        let height = height.to_string();
        self.get(&["blocks", height.as_str()], None).await
    }

    /// Height of the chain tip, read from the network info.
    pub async fn get_current_block_height(&self) -> Result<u64, Error> {
        Ok(self.get_network_info().await?.latest_block_height)
    }

    // -- Transactions --

    /// Fetches the most recent transactions. `limit` is capped at 200.
    pub async fn get_latest_transactions(
        &self,
        limit: u32,
    ) -> Result<Vec<serde_json::Value>, Error> {
        let query = TransactionsQuery::default().with_limit(limit);
        let page: TransactionsPage = self.get(&["transactions"], Some(&query)).await?;
        Ok(page.transactions)
    }

    /// Fetches one transaction by hash as returned by the server.
    pub async fn get_transaction_by_hash(&self, tx_hash: &str) -> Result<serde_json::Value, Error> {
        self.get(&["transactions", tx_hash], None).await
    }

    // -- Wallet --

    /// Asks the node to create a wallet. The result carries the private key.
    pub async fn create_wallet(&self) -> Result<WalletInfo, Error> {
        let resp: CreateWalletResponse = self.get(&["wallet", "create"], None).await?;
        Ok(resp.into())
    }

    /// Looks up the balance of `address`. The address format is not checked here.
    pub async fn get_wallet_balance(&self, address: &str) -> Result<WalletInfo, Error> {
        let resp: BalanceResponse = self
            .post(&["wallet", "balance"], &BalanceRequest { address })
            .await?;
        Ok(resp.into_wallet(address))
    }

    // -- Mining --

    /// Fetches the mining status of a device.
    pub async fn get_miner_status(&self, device_id: &str) -> Result<serde_json::Value, Error> {
        let query = MinerStatusQuery::new(device_id);
        self.get(&["miner", "status"], Some(&query)).await
    }

    /// Reports that a mining device is alive. `timestamp` defaults to now.
    pub async fn send_mining_heartbeat(
        &self,
        device_id: &str,
        session_token: &str,
        timestamp: Option<i64>,
    ) -> Result<serde_json::Value, Error> {
        let body = HeartbeatRequest {
            device_id,
            session_token,
            timestamp: timestamp.unwrap_or_else(|| self.clock.unix_seconds()),
        };
        self.post(&["api", "v1", "mining", "heartbeat"], &body)
            .await
    }

    /// Fetches the node's mining detection statistics.
    pub async fn get_mining_stats(&self) -> Result<serde_json::Value, Error> {
        self.get(&["mining", "detection", "stats"], None).await
    }

    // -- Admin --

    /// Fetches the node's rate limiter statistics.
    pub async fn get_rate_limit_stats(&self) -> Result<serde_json::Value, Error> {
        self.get(&["admin", "rate-limit", "stats"], None).await
    }

    // -- Health --

    /// True if the network info endpoint answers successfully.
    pub async fn is_server_reachable(&self) -> bool {
        self.get_network_info().await.is_ok()
    }

    /// Probes the node. Never fails; errors are folded into the report.
    pub async fn get_server_health(&self) -> ServerHealth {
        match self.get_network_info().await {
            Ok(info) => {
                let reachable = self.is_server_reachable().await;
                ServerHealth {
                    status: HealthStatus::Healthy,
                    reachable,
                    block_height: Some(info.latest_block_height),
                    active_nodes: Some(info.active_nodes),
                    error: None,
                    timestamp: self.clock.now(),
                }
            }
            Err(e) => {
                tracing::warn!("Health check against {} failed: {}", self.base_url(), e);
                ServerHealth {
                    status: HealthStatus::Unhealthy,
                    reachable: false,
                    block_height: None,
                    active_nodes: None,
                    error: Some(e.message()),
                    timestamp: self.clock.now(),
                }
            }
        }
    }

    // -- Identifiers --

    /// Generates a device ID stamped with this client's clock.
    pub fn generate_device_id(&self) -> String {
        ids::device_id_with(self.clock.as_ref(), &mut rand::thread_rng())
    }

    /// Generates a session token stamped with this client's clock.
    pub fn generate_session_token(&self) -> String {
        ids::session_token_with(self.clock.as_ref(), &mut rand::thread_rng())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
