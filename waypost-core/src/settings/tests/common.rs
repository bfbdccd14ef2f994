use crate::conf::types::{
    ConfigVersion, DbListenerConfig, DeploymentConfig, KubeProxyConfig, NetAddr, ProxyConfig,
    SshProxyConfig,
};
use crate::networking::{
    ClusterNetworkingConfig, NetworkingConfigProvider, NetworkingError, ProxyListenerMode,
};
use crate::settings::{ProxySettingsResolver, SshListenAddr};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn addr(s: &str) -> NetAddr {
    s.parse().unwrap()
}

pub fn addrs(list: &[&str]) -> Vec<NetAddr> {
    list.iter().map(|s| addr(s)).collect()
}

/// A config with every proxy service configured on its own listener.
pub fn full_config(version: ConfigVersion) -> DeploymentConfig {
    let mut config = DeploymentConfig::default();
    config.server.version = version;
    config.proxy = ProxyConfig {
        web_listen_addr: addr("0.0.0.0:3080"),
        public_addrs: addrs(&["proxy.example.com:3080", "proxy2.example.com:3080"]),
        ssh: SshProxyConfig {
            listen_addr: addr("0.0.0.0:3023"),
            tunnel_listen_addr: addr("0.0.0.0:3024"),
            public_addrs: addrs(&["ssh.example.com:3023"]),
            tunnel_public_addrs: addrs(&["tunnel.example.com:3024"]),
        },
        kube: KubeProxyConfig {
            enabled: true,
            listen_addr: addr("0.0.0.0:3026"),
            public_addrs: addrs(&["kube.example.com:3026"]),
        },
        mysql: DbListenerConfig {
            listen_addr: addr("0.0.0.0:3036"),
            public_addrs: addrs(&["mysql.example.com:3036"]),
        },
        postgres: DbListenerConfig {
            listen_addr: addr("0.0.0.0:5432"),
            public_addrs: addrs(&["db.example.com:5432"]),
        },
    };
    config
}

/// A config with only the web listener.
pub fn minimal_config(version: ConfigVersion) -> DeploymentConfig {
    let mut config = DeploymentConfig::default();
    config.server.version = version;
    config.proxy.web_listen_addr = addr("0.0.0.0:3080");
    config
}

pub fn resolver(config: DeploymentConfig, mode: ProxyListenerMode) -> ProxySettingsResolver {
    resolver_with(config, Arc::new(FixedMode::new(mode)))
}

pub fn resolver_with(
    config: DeploymentConfig,
    provider: Arc<dyn NetworkingConfigProvider>,
) -> ProxySettingsResolver {
    ProxySettingsResolver::new(Arc::new(config), Arc::new(SshListenAddr::new()), provider)
}

/// Always answers with the same listener mode and counts fetches.
pub struct FixedMode {
    mode: ProxyListenerMode,
    pub calls: AtomicUsize,
}

impl FixedMode {
    pub fn new(mode: ProxyListenerMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl NetworkingConfigProvider for FixedMode {
    async fn cluster_networking_config(&self) -> Result<ClusterNetworkingConfig, NetworkingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ClusterNetworkingConfig::new(self.mode))
    }
}

/// Control plane that cannot be reached.
pub struct Unreachable {
    pub calls: AtomicUsize,
}

impl Unreachable {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl NetworkingConfigProvider for Unreachable {
    async fn cluster_networking_config(&self) -> Result<ClusterNetworkingConfig, NetworkingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(NetworkingError::Unavailable {
            reason: "connection refused".to_string(),
        })
    }
}

/// Control plane that answers after a delay.
pub struct Slow {
    pub delay: Duration,
}

#[async_trait]
impl NetworkingConfigProvider for Slow {
    async fn cluster_networking_config(&self) -> Result<ClusterNetworkingConfig, NetworkingError> {
        tokio::time::sleep(self.delay).await;
        Ok(ClusterNetworkingConfig::new(ProxyListenerMode::Multiplex))
    }
}
