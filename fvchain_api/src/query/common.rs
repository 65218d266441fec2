//! Shared query infrastructure: the [`Query`] and [`LimitedQuery`] traits.

use url::Url;

/// Number of items requested when the caller does not pick a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// A query that carries a `limit` parameter capped by the server.
pub trait LimitedQuery: Query {
    /// Largest limit the endpoint accepts. Larger requests are silently capped.
    const MAX_LIMIT: u32;

    /// Returns a mutable reference to the stored limit.
    fn get_limit_mut(&mut self) -> &mut u32;

    /// Sets the number of items to fetch, capped at [`Self::MAX_LIMIT`].
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        *self.get_limit_mut() = limit.min(Self::MAX_LIMIT);
        self
    }
}

/// Appends `limit=<n>` to the URL.
pub(crate) fn add_limit_to_url(url: &Url, limit: u32) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string());
    url
}
