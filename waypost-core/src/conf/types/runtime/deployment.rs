use crate::conf::types::{ProxyConfig, ServerConfig};
use crate::networking::ClusterNetworkingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fully validated configuration of one waypost process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub server: ServerConfig,
    pub proxy: ProxyConfig,
    pub networking: ClusterNetworkingConfig,
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub fetch_timeout_ms: u64,
}

impl DiscoveryConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 5_000,
        }
    }
}
