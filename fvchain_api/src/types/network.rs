use serde::{Deserialize, Serialize};

use super::default_on_null;

/// Network status returned by `/network/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInfo {
    #[serde(deserialize_with = "default_on_null")]
    pub latest_block_height: u64,
    #[serde(deserialize_with = "default_on_null")]
    pub active_nodes: u64,
    #[serde(deserialize_with = "default_on_null")]
    pub network_id: String,
    #[serde(deserialize_with = "default_on_null")]
    pub chain_id: String,
}
