use crate::networking::NetworkingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to fetch cluster networking config")]
    FetchNetworkingConfig(#[source] NetworkingError),
}
