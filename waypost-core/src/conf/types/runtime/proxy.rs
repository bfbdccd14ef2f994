use crate::conf::types::NetAddr;
use serde::{Deserialize, Serialize};

/// Proxy addresses as loaded from the deployment configuration.
///
/// Public address lists are ordered; the first entry is the canonical one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub web_listen_addr: NetAddr,
    pub public_addrs: Vec<NetAddr>,
    pub ssh: SshProxyConfig,
    pub kube: KubeProxyConfig,
    pub mysql: DbListenerConfig,
    pub postgres: DbListenerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshProxyConfig {
    pub listen_addr: NetAddr,
    pub tunnel_listen_addr: NetAddr,
    pub public_addrs: Vec<NetAddr>,
    pub tunnel_public_addrs: Vec<NetAddr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubeProxyConfig {
    pub enabled: bool,
    pub listen_addr: NetAddr,
    pub public_addrs: Vec<NetAddr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbListenerConfig {
    pub listen_addr: NetAddr,
    pub public_addrs: Vec<NetAddr>,
}
