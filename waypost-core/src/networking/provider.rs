use crate::networking::{ClusterNetworkingConfig, NetworkingError};
use async_trait::async_trait;

/// Source of the cluster networking config.
///
/// Implementations own caching and retries; callers fetch once per request.
#[async_trait]
pub trait NetworkingConfigProvider: Send + Sync {
    async fn cluster_networking_config(&self) -> Result<ClusterNetworkingConfig, NetworkingError>;
}
