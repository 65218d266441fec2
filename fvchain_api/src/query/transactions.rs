use url::Url;

use super::common::{add_limit_to_url, LimitedQuery, Query, DEFAULT_LIMIT};

/// Query for `GET /transactions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionsQuery {
    limit: u32,
}

impl Default for TransactionsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TransactionsQuery {
    /// Limit that will be sent, after capping.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Query for TransactionsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        add_limit_to_url(url, self.limit)
    }
}

impl LimitedQuery for TransactionsQuery {
    const MAX_LIMIT: u32 = 200;

    fn get_limit_mut(&mut self) -> &mut u32 {
        &mut self.limit
    }
}
