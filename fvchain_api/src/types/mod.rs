//! Records decoded from node responses.
//!
//! Decoding is lenient: a missing (or `null`) field takes its type's default
//! (0, empty string). A field of the wrong JSON type still fails to decode.

use serde::{Deserialize, Deserializer};

mod network;
pub use self::network::NetworkInfo;

mod wallet;
pub use self::wallet::WalletInfo;
pub(crate) use self::wallet::{BalanceRequest, BalanceResponse, CreateWalletResponse};

mod block;
pub use self::block::BlockInfo;
pub(crate) use self::block::BlocksPage;

mod transaction;
pub use self::transaction::TransactionInfo;
pub(crate) use self::transaction::TransactionsPage;

mod mining;
pub(crate) use self::mining::HeartbeatRequest;

mod health;
pub use self::health::{HealthStatus, ServerHealth};

/// Deserializes `null` as the type's default value.
pub(crate) fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
