use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct DiscoverySpec {
    /// Upper bound for the networking config fetch behind `/webapi/find`.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl Default for DiscoverySpec {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

fn default_fetch_timeout_ms() -> u64 {
    5_000
}
