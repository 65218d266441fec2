use serde::{Deserialize, Serialize};

use super::default_on_null;

/// A wallet as reported by the node.
///
/// `private_key` is only present on a freshly created wallet and `balance`
/// only on a balance lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// Body of `GET /wallet/create`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct CreateWalletResponse {
    #[serde(deserialize_with = "default_on_null")]
    address: String,
    #[serde(deserialize_with = "default_on_null")]
    private_key: String,
}

impl From<CreateWalletResponse> for WalletInfo {
    fn from(resp: CreateWalletResponse) -> Self {
        WalletInfo {
            address: resp.address,
            private_key: Some(resp.private_key),
            balance: None,
        }
    }
}

/// Body sent to `POST /wallet/balance`.
#[derive(Serialize)]
pub(crate) struct BalanceRequest<'a> {
    pub address: &'a str,
}

/// Body of `POST /wallet/balance`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct BalanceResponse {
    address: Option<String>,
    #[serde(deserialize_with = "default_on_null")]
    balance: f64,
}

impl BalanceResponse {
    /// Builds the wallet record, falling back to the queried address.
    pub(crate) fn into_wallet(self, queried: &str) -> WalletInfo {
        WalletInfo {
            address: self.address.unwrap_or_else(|| queried.to_string()),
            private_key: None,
            balance: Some(self.balance),
        }
    }
}
