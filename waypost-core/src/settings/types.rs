use serde::{Deserialize, Serialize};

/// Proxy settings advertised to clients.
///
/// Field names are a wire contract shared with older clients. Unset addresses
/// are empty strings, never `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    pub kube: KubeProxySettings,
    pub ssh: SshProxySettings,
    pub db: DbProxySettings,
    /// Clients should dial the web port and rely on TLS SNI/ALPN routing.
    pub tls_routing_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubeProxySettings {
    pub enabled: bool,
    #[serde(default)]
    pub public_addr: String,
    #[serde(default)]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshProxySettings {
    #[serde(default)]
    pub listen_addr: String,
    #[serde(default)]
    pub tunnel_listen_addr: String,
    #[serde(default)]
    pub public_addr: String,
    #[serde(default)]
    pub ssh_public_addr: String,
    #[serde(default, rename = "ssh_tunnel_public_addr")]
    pub tunnel_public_addr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbProxySettings {
    #[serde(default)]
    pub postgres_listen_addr: String,
    #[serde(default)]
    pub postgres_public_addr: String,
    #[serde(default)]
    pub mysql_listen_addr: String,
    #[serde(default)]
    pub mysql_public_addr: String,
}
