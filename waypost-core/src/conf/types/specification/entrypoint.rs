use crate::conf::types::specification::{DiscoverySpec, NetworkingSpec, ProxySpec, ServerSpec};
use serde::{Deserialize, Serialize};

/// Represents the top-level configuration file (`waypost.hcl`).
#[derive(Debug, Deserialize, Serialize)]
pub struct EntrypointSpec {
    pub server: ServerSpec,

    #[serde(default)]
    pub proxy: ProxySpec,

    #[serde(default)]
    pub networking: NetworkingSpec,

    #[serde(default)]
    pub discovery: DiscoverySpec,
}
