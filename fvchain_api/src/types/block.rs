use serde::{Deserialize, Serialize};

use super::default_on_null;

/// Summary of one block.
///
/// The block endpoints return raw JSON; use [`BlockInfo::from_value`] to pull
/// the common fields out of one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockInfo {
    #[serde(deserialize_with = "default_on_null")]
    pub height: u64,
    #[serde(deserialize_with = "default_on_null")]
    pub hash: String,
    #[serde(deserialize_with = "default_on_null")]
    pub timestamp: i64,
    #[serde(alias = "transaction_count", deserialize_with = "default_on_null")]
    pub transactions_count: u64,
    #[serde(deserialize_with = "default_on_null")]
    pub miner: String,
}

impl BlockInfo {
    /// Decodes a block record from a raw JSON value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        BlockInfo::deserialize(value)
    }
}

/// Body of `GET /blocks/latest`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct BlocksPage {
    #[serde(deserialize_with = "default_on_null")]
    pub blocks: Vec<serde_json::Value>,
}
