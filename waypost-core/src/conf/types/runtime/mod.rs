mod deployment;
mod proxy;
mod server;

pub use deployment::{DeploymentConfig, DiscoveryConfig};
pub use proxy::{DbListenerConfig, KubeProxyConfig, ProxyConfig, SshProxyConfig};
pub use server::{ConfigVersion, ServerConfig};
