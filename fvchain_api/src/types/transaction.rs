use serde::{Deserialize, Serialize};

use super::default_on_null;

/// Summary of one transaction.
///
/// Accepts both `from_address`/`to_address` and the node's `from`/`to` keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionInfo {
    #[serde(deserialize_with = "default_on_null")]
    pub hash: String,
    #[serde(alias = "from", deserialize_with = "default_on_null")]
    pub from_address: String,
    #[serde(alias = "to", deserialize_with = "default_on_null")]
    pub to_address: String,
    #[serde(deserialize_with = "default_on_null")]
    pub amount: f64,
    #[serde(deserialize_with = "default_on_null")]
    pub fee: f64,
    #[serde(deserialize_with = "default_on_null")]
    pub timestamp: i64,
    #[serde(deserialize_with = "default_on_null")]
    pub block_height: u64,
}

impl TransactionInfo {
    /// Decodes a transaction record from a raw JSON value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        TransactionInfo::deserialize(value)
    }
}

/// Body of `GET /transactions`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct TransactionsPage {
    #[serde(deserialize_with = "default_on_null")]
    pub transactions: Vec<serde_json::Value>,
}
