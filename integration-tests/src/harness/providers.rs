use async_trait::async_trait;
use waypost_core::networking::{
    ClusterNetworkingConfig, NetworkingConfigProvider, NetworkingError,
};

/// A control plane that cannot be reached.
pub struct UnreachableControlPlane;

#[async_trait]
impl NetworkingConfigProvider for UnreachableControlPlane {
    async fn cluster_networking_config(&self) -> Result<ClusterNetworkingConfig, NetworkingError> {
        Err(NetworkingError::Unavailable {
            reason: "control plane unreachable".to_string(),
        })
    }
}
