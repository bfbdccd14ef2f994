mod error;
mod provider;
mod shared;

pub use error::NetworkingError;
pub use provider::NetworkingConfigProvider;
pub use shared::SharedNetworkingConfig;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the cluster's proxy accepts client traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyListenerMode {
    /// One listener per proxy service.
    #[default]
    Separate,
    /// Everything arrives on the web TLS port and is routed by SNI/ALPN.
    Multiplex,
}

impl FromStr for ProxyListenerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "separate" => Ok(Self::Separate),
            "multiplex" => Ok(Self::Multiplex),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ProxyListenerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separate => write!(f, "separate"),
            Self::Multiplex => write!(f, "multiplex"),
        }
    }
}

/// Cluster-wide networking settings owned by the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterNetworkingConfig {
    pub proxy_listener_mode: ProxyListenerMode,
}

impl ClusterNetworkingConfig {
    pub fn new(proxy_listener_mode: ProxyListenerMode) -> Self {
        Self {
            proxy_listener_mode,
        }
    }

    pub fn proxy_listener_mode(&self) -> ProxyListenerMode {
        self.proxy_listener_mode
    }
}

#[cfg(test)]
mod tests;
