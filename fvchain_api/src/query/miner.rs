use url::Url;

use super::common::Query;

/// Query for `GET /miner/status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinerStatusQuery {
    pub device_id: String,
}

impl MinerStatusQuery {
    pub fn new(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
        }
    }
}

impl Query for MinerStatusQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("device_id", &self.device_id);
        url
    }
}
