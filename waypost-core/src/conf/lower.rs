use crate::conf::types::{
    ConfigVersion, DbListenerConfig, DbListenerSpec, DeploymentConfig, DiscoveryConfig,
    EntrypointSpec, KubeProxyConfig, NetAddr, ProxyConfig, ProxySpec, ServerConfig,
    SshProxyConfig,
};
use crate::networking::{ClusterNetworkingConfig, ProxyListenerMode};

/// Lower the operator DSL into runtime config.
///
/// Must only be called on a spec that passed `validate_spec_config`.
pub(crate) fn lower_config(spec: EntrypointSpec) -> DeploymentConfig {
    DeploymentConfig {
        server: ServerConfig {
            version: ConfigVersion::try_from(spec.server.version).unwrap_or_default(),
            threads: spec.server.threads,
            pid_file: spec.server.pid_file,
        },
        proxy: lower_proxy(spec.proxy),
        networking: ClusterNetworkingConfig::new(
            spec.networking
                .proxy_listener_mode
                .parse::<ProxyListenerMode>()
                .unwrap_or_default(),
        ),
        discovery: DiscoveryConfig {
            fetch_timeout_ms: spec.discovery.fetch_timeout_ms,
        },
    }
}

fn lower_proxy(spec: ProxySpec) -> ProxyConfig {
    ProxyConfig {
        web_listen_addr: addr(&spec.web_listen_addr),
        public_addrs: addrs(&spec.public_addrs),
        ssh: SshProxyConfig {
            listen_addr: addr(&spec.ssh.listen_addr),
            tunnel_listen_addr: addr(&spec.ssh.tunnel_listen_addr),
            public_addrs: addrs(&spec.ssh.public_addrs),
            tunnel_public_addrs: addrs(&spec.ssh.tunnel_public_addrs),
        },
        kube: KubeProxyConfig {
            enabled: spec.kube.enabled,
            listen_addr: addr(&spec.kube.listen_addr),
            public_addrs: addrs(&spec.kube.public_addrs),
        },
        mysql: lower_db(&spec.mysql),
        postgres: lower_db(&spec.postgres),
    }
}

fn lower_db(spec: &DbListenerSpec) -> DbListenerConfig {
    DbListenerConfig {
        listen_addr: addr(&spec.listen_addr),
        public_addrs: addrs(&spec.public_addrs),
    }
}

fn addr(raw: &str) -> NetAddr {
    NetAddr::from_validated(raw.trim())
}

fn addrs(raw: &[String]) -> Vec<NetAddr> {
    raw.iter().map(|s| addr(s)).collect()
}
