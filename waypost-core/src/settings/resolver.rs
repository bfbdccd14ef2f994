use crate::conf::types::{ConfigVersion, DeploymentConfig, NetAddr};
use crate::networking::{NetworkingConfigProvider, NetworkingError, ProxyListenerMode};
use crate::settings::{
    DbProxySettings, KubeProxySettings, ProxySettings, SettingsError, SshListenAddr,
    SshProxySettings,
};
use std::sync::Arc;
use std::time::Duration;

/// Port advertised for a postgres listener configured without one.
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Builds the proxy settings clients use to find each proxy service.
pub struct ProxySettingsResolver {
    config: Arc<DeploymentConfig>,
    ssh_listen_addr: Arc<SshListenAddr>,
    networking: Arc<dyn NetworkingConfigProvider>,
}

impl ProxySettingsResolver {
    pub fn new(
        config: Arc<DeploymentConfig>,
        ssh_listen_addr: Arc<SshListenAddr>,
        networking: Arc<dyn NetworkingConfigProvider>,
    ) -> Self {
        Self {
            config,
            ssh_listen_addr,
            networking,
        }
    }

    /// Handle for the listener startup path to record the bound SSH address.
    pub fn ssh_listen_addr(&self) -> Arc<SshListenAddr> {
        self.ssh_listen_addr.clone()
    }

    /// Fetches the cluster listener mode and resolves the current settings.
    ///
    /// The fetch is the only fallible step and is not retried here.
    pub async fn get_settings(&self) -> Result<ProxySettings, SettingsError> {
        let networking = self
            .networking
            .cluster_networking_config()
            .await
            .map_err(SettingsError::FetchNetworkingConfig)?;

        Ok(self.resolve(networking.proxy_listener_mode()))
    }

    /// Same as [`get_settings`](Self::get_settings), but gives up on the fetch
    /// after `timeout`.
    pub async fn get_settings_within(
        &self,
        timeout: Duration,
    ) -> Result<ProxySettings, SettingsError> {
        let networking =
            match tokio::time::timeout(timeout, self.networking.cluster_networking_config()).await
            {
                Ok(result) => result,
                Err(_) => Err(NetworkingError::DeadlineExceeded { timeout }),
            }
            .map_err(SettingsError::FetchNetworkingConfig)?;

        Ok(self.resolve(networking.proxy_listener_mode()))
    }

    /// Resolves the settings for a known listener mode.
    pub fn resolve(&self, mode: ProxyListenerMode) -> ProxySettings {
        let version = self.config.server.version;
        let settings = match version {
            ConfigVersion::V1 => self.build_settings(mode),
            ConfigVersion::V2 => self.build_settings_v2(mode),
        };

        tracing::debug!(
            %version,
            listener_mode = %mode,
            tls_routing_enabled = settings.tls_routing_enabled,
            "proxy settings resolved"
        );

        settings
    }

    /// Every proxy service on its own listener. With TLS routing enabled,
    /// capable clients still dial the web port instead.
    fn build_settings(&self, mode: ProxyListenerMode) -> ProxySettings {
        let proxy = &self.config.proxy;

        let mut settings = ProxySettings {
            tls_routing_enabled: mode == ProxyListenerMode::Multiplex,
            kube: KubeProxySettings {
                enabled: proxy.kube.enabled,
                ..Default::default()
            },
            ssh: SshProxySettings {
                listen_addr: self.bound_ssh_listen_addr().to_string(),
                tunnel_listen_addr: proxy.ssh.tunnel_listen_addr.to_string(),
                ..Default::default()
            },
            db: DbProxySettings::default(),
        };

        self.set_public_addrs(&mut settings);

        if !proxy.mysql.listen_addr.is_empty() {
            settings.db.mysql_listen_addr = proxy.mysql.listen_addr.to_string();
        }

        if !proxy.postgres.listen_addr.is_empty() {
            settings.db.postgres_listen_addr = proxy.postgres.listen_addr.to_string();
        }

        if proxy.kube.enabled {
            settings.kube.listen_addr = proxy.kube.listen_addr.to_string();
        }

        settings
    }

    /// v2 layout: in multiplex mode all services share the web listener.
    fn build_settings_v2(&self, mode: ProxyListenerMode) -> ProxySettings {
        let mut settings = self.build_settings(mode);

        if mode == ProxyListenerMode::Multiplex {
            let multiplex_addr = self.config.proxy.web_listen_addr.to_string();
            settings.ssh.listen_addr = multiplex_addr.clone();
            settings.ssh.tunnel_listen_addr = multiplex_addr.clone();
            settings.kube.listen_addr = multiplex_addr.clone();
            settings.db.mysql_listen_addr = multiplex_addr.clone();
            settings.db.postgres_listen_addr = multiplex_addr;
        }

        settings
    }

    fn set_public_addrs(&self, settings: &mut ProxySettings) {
        let proxy = &self.config.proxy;

        settings.ssh.public_addr = first_addr(&proxy.public_addrs);
        settings.ssh.ssh_public_addr = first_addr(&proxy.ssh.public_addrs);
        settings.ssh.tunnel_public_addr = first_addr(&proxy.ssh.tunnel_public_addrs);
        if proxy.kube.enabled {
            settings.kube.public_addr = first_addr(&proxy.kube.public_addrs);
        }
        settings.db.mysql_public_addr = first_addr(&proxy.mysql.public_addrs);
        settings.db.postgres_public_addr = self.postgres_public_addr();
    }

    /// Postgres public address, with a fallback for older clients.
    ///
    /// Older clients only read `postgres_public_addr`, so when a separate
    /// postgres listener exists without a dedicated public address, advertise
    /// the proxy host paired with the postgres listener port.
    fn postgres_public_addr(&self) -> String {
        let proxy = &self.config.proxy;

        if let Some(addr) = proxy.postgres.public_addrs.first() {
            return addr.to_string();
        }

        if proxy.postgres.listen_addr.is_empty() {
            return String::new();
        }

        let host = match proxy.public_addrs.first() {
            Some(public_addr) => public_addr.host(),
            None => proxy.web_listen_addr.host(),
        };

        NetAddr::join(host, proxy.postgres.listen_addr.port(DEFAULT_POSTGRES_PORT)).to_string()
    }

    /// The bound SSH address, or the configured one until the listener is up.
    fn bound_ssh_listen_addr(&self) -> &NetAddr {
        self.ssh_listen_addr
            .get()
            .unwrap_or(&self.config.proxy.ssh.listen_addr)
    }
}

fn first_addr(addrs: &[NetAddr]) -> String {
    addrs.first().map(NetAddr::to_string).unwrap_or_default()
}
