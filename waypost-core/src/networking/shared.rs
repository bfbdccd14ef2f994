use crate::networking::{ClusterNetworkingConfig, NetworkingConfigProvider, NetworkingError};
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::Arc;

/// In-process networking config snapshot.
///
/// Seeded from the `networking` block of the config file and replaced as a
/// whole on reload. Readers always see either the old or the new value.
pub struct SharedNetworkingConfig {
    current: ArcSwap<ClusterNetworkingConfig>,
}

impl SharedNetworkingConfig {
    pub fn new(initial: ClusterNetworkingConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    pub fn load(&self) -> ClusterNetworkingConfig {
        **self.current.load()
    }

    /// Replaces the snapshot and returns the previous one.
    pub fn store(&self, next: ClusterNetworkingConfig) -> ClusterNetworkingConfig {
        let previous = self.current.swap(Arc::new(next));
        *previous
    }
}

#[async_trait]
impl NetworkingConfigProvider for SharedNetworkingConfig {
    async fn cluster_networking_config(&self) -> Result<ClusterNetworkingConfig, NetworkingError> {
        Ok(self.load())
    }
}
