use crate::conf::DeploymentConfig;
use crate::conf::types::NetAddr;
use crate::networking::{NetworkingConfigProvider, SharedNetworkingConfig};
use crate::proxy::DiscoveryGateway;
use crate::server::pid;
use crate::server::reload::{ReloadHandle, reload_networking_config};
use crate::settings::{ProxySettingsResolver, SshListenAddr};
use anyhow::{Result, anyhow};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::path::PathBuf;
use std::sync::Arc;

/// Port used when the web listener is configured without one.
pub const DEFAULT_WEB_PORT: u16 = 3080;

/// Run the discovery server with the given configuration.
pub fn run(config_path: PathBuf, config: DeploymentConfig) -> Result<()> {
    use tokio::runtime::Builder;

    // Attempt to write pid file (best-effort)
    if let Some(pid_file) = &config.server.pid_file {
        if let Err(e) = pid::write_pid(pid_file) {
            tracing::warn!(
                error = %e,
                pid_file = %pid_file.display(),
                "failed to write pid file; continuing"
            );
        } else {
            tracing::info!(pid_file = %pid_file.display(), "pid file written");
        }
    }

    let config = Arc::new(config);
    let networking = Arc::new(SharedNetworkingConfig::new(config.networking));
    let resolver = build_resolver(config.clone(), networking.clone());

    // Control-plane runtime (signals + reload only)
    let control_rt = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    // Reload wiring
    let reload = ReloadHandle::new();

    // Spawn signal handler
    control_rt.spawn({
        let reload = reload.clone();
        async move {
            if let Err(e) = reload.install_signal_handler().await {
                tracing::error!(error = %e, "failed to install SIGHUP handler");
            }
        }
    });

    // Spawn reload loop
    control_rt.spawn({
        let mut reload_rx = reload.subscribe();
        let config = config.clone();
        let networking = networking.clone();

        async move {
            tracing::info!("Reload loop started");

            while reload_rx.changed().await.is_ok() {
                tracing::info!("Reload requested");

                match reload_networking_config(&config_path, &config, &networking) {
                    Ok(_) => tracing::info!("reload successful"),
                    Err(e) => tracing::error!(error = %e, "reload failed"),
                }
            }
        }
    });

    // Build Pingora server (Pingora owns its own runtimes)
    let server = build_pingora_server(&config, resolver)?;

    // Ensure pid file cleanup on shutdown
    if let Some(pid_file) = config.server.pid_file.clone() {
        ctrlc::set_handler(move || {
            tracing::info!("shutdown requested, removing pid file");
            pid::remove_pid(&pid_file);
            std::process::exit(0);
        })?;
    }

    tracing::info!(
        listen = %web_listen_addr(&config),
        version = %config.server.version,
        listener_mode = %config.networking.proxy_listener_mode(),
        "waypost discovery server starting"
    );

    // control_rt must stay in scope so its worker thread lives;
    // run_forever blocks the main thread.
    server.run_forever();
}

/// Wire a resolver over the shared networking snapshot.
///
/// The SSH listen address cell starts empty; whoever binds the SSH listener
/// records the concrete address through `ProxySettingsResolver::ssh_listen_addr`.
pub fn build_resolver(
    config: Arc<DeploymentConfig>,
    networking: Arc<SharedNetworkingConfig>,
) -> Arc<ProxySettingsResolver> {
    let networking: Arc<dyn NetworkingConfigProvider> = networking;
    Arc::new(ProxySettingsResolver::new(
        config,
        Arc::new(SshListenAddr::new()),
        networking,
    ))
}

/// Build the Pingora server.
pub fn build_pingora_server(
    config: &DeploymentConfig,
    resolver: Arc<ProxySettingsResolver>,
) -> Result<Server> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new()
            .ok_or_else(|| anyhow!("could not construct pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = DiscoveryGateway::new(resolver, config.discovery.fetch_timeout());

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(web_listen_addr(config).as_str());

    server.add_service(svc);

    Ok(server)
}

fn web_listen_addr(config: &DeploymentConfig) -> NetAddr {
    let web = &config.proxy.web_listen_addr;
    NetAddr::join(web.host(), web.port(DEFAULT_WEB_PORT))
}
