use crate::conf::{ConfigError, DeploymentConfig, load_config};
use crate::networking::{ClusterNetworkingConfig, SharedNetworkingConfig};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

#[derive(Clone, Copy, Debug)]
pub struct ReloadEvent {
    pub epoch: u64,
}

#[derive(Clone)]
pub struct ReloadHandle {
    tx: watch::Sender<ReloadEvent>,
    epoch: Arc<AtomicU64>,
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ReloadEvent { epoch: 0 });
        Self {
            tx,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ReloadEvent> {
        self.tx.subscribe()
    }

    pub fn notify_reload(&self) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::Relaxed) + 1;
        let _ = self.tx.send(ReloadEvent { epoch });
        tracing::info!(epoch, "reload signaled");
        epoch
    }

    pub async fn install_signal_handler(&self) -> anyhow::Result<()> {
        let mut hup = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup())?;

        while hup.recv().await.is_some() {
            tracing::info!("SIGHUP received");
            self.notify_reload();
        }
        Ok(())
    }
}

/// Re-read the config directory and swap in its `networking` block.
///
/// The rest of the deployment config is fixed for the life of the process;
/// changes to it are reported and ignored until restart.
pub fn reload_networking_config(
    config_path: &Path,
    current: &DeploymentConfig,
    networking: &SharedNetworkingConfig,
) -> Result<ClusterNetworkingConfig, ConfigError> {
    let next = load_config(config_path)?.config;

    if next.server.version != current.server.version || next.proxy != current.proxy {
        tracing::warn!(
            config_path = %config_path.display(),
            "proxy or schema version changes require a restart; only networking was reloaded"
        );
    }

    let previous = networking.store(next.networking);
    tracing::info!(
        old_listener_mode = %previous.proxy_listener_mode(),
        new_listener_mode = %next.networking.proxy_listener_mode(),
        "networking config reloaded"
    );

    Ok(next.networking)
}
