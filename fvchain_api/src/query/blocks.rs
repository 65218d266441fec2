use url::Url;

use super::common::{add_limit_to_url, LimitedQuery, Query, DEFAULT_LIMIT};

/// Query for `GET /blocks/latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlocksQuery {
    limit: u32,
}

impl Default for BlocksQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl BlocksQuery {
    /// Limit that will be sent, after capping.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Query for BlocksQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        add_limit_to_url(url, self.limit)
    }
}

impl LimitedQuery for BlocksQuery {
    const MAX_LIMIT: u32 = 100;

    fn get_limit_mut(&mut self) -> &mut u32 {
        &mut self.limit
    }
}
