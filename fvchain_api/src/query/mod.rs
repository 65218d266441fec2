mod common;
pub use self::common::{LimitedQuery, Query, DEFAULT_LIMIT};

mod blocks;
pub use self::blocks::BlocksQuery;

mod transactions;
pub use self::transactions::TransactionsQuery;

mod miner;
pub use self::miner::MinerStatusQuery;
