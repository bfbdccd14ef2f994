use serde::{Deserialize, Serialize};

/// The `proxy { ... }` block. Addresses stay raw strings here; they are
/// checked by validation and only then lowered into `NetAddr`s.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProxySpec {
    #[serde(default)]
    pub web_listen_addr: String,

    #[serde(default)]
    pub public_addrs: Vec<String>,

    #[serde(default)]
    pub ssh: SshProxySpec,

    #[serde(default)]
    pub kube: KubeProxySpec,

    #[serde(default)]
    pub mysql: DbListenerSpec,

    #[serde(default)]
    pub postgres: DbListenerSpec,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SshProxySpec {
    /// May use port 0; the bound port is reported once the listener is up.
    #[serde(default)]
    pub listen_addr: String,

    #[serde(default)]
    pub tunnel_listen_addr: String,

    #[serde(default)]
    pub public_addrs: Vec<String>,

    #[serde(default)]
    pub tunnel_public_addrs: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KubeProxySpec {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub listen_addr: String,

    #[serde(default)]
    pub public_addrs: Vec<String>,
}

/// Shared shape of the `mysql` and `postgres` blocks.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DbListenerSpec {
    #[serde(default)]
    pub listen_addr: String,

    #[serde(default)]
    pub public_addrs: Vec<String>,
}
