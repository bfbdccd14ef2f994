//! Client-facing proxy settings.
//!
//! Resolves the deployment configuration plus the cluster's proxy listener
//! mode into the descriptor that clients fetch during bootstrap to learn how
//! to reach each proxy service.

mod error;
mod resolver;
mod ssh_addr;
#[cfg(test)]
mod tests;
mod types;

pub use error::SettingsError;
pub use resolver::{DEFAULT_POSTGRES_PORT, ProxySettingsResolver};
pub use ssh_addr::SshListenAddr;
pub use types::{DbProxySettings, KubeProxySettings, ProxySettings, SshProxySettings};
