//! Async client for the Fractal Vortex Chain (FVChain) node RPC API.
//!
//! [`Client`] wraps the node's HTTP/JSON endpoints (network status, blocks,
//! transactions, wallets, mining and admin stats) and maps every failure onto
//! one [`Error`] type. The free functions cover address validation, unit
//! conversion and device/session ID generation.

mod address;
mod client;
pub mod clock;
pub mod errors;
mod ids;
mod query;
pub mod types;
mod units;
mod user_agent;
pub use self::address::{validate_address, ADDRESS_LEN};
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::ids::{device_id_with, generate_device_id, generate_session_token, session_token_with};
pub use self::query::{
    BlocksQuery, LimitedQuery, MinerStatusQuery, Query, TransactionsQuery, DEFAULT_LIMIT,
};
pub use self::units::{from_smallest_unit, from_smallest_unit_int, to_smallest_unit, UnitError};
