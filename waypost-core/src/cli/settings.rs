use crate::cli::conf::print_value;
use crate::conf::load_config;
use crate::networking::SharedNetworkingConfig;
use crate::server::build_resolver;
use crate::settings::ProxySettings;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Resolve the proxy settings clients would receive and print them.
///
/// Uses the `networking` block of the config as the cluster networking config.
pub fn run(path: &Path, yaml: bool) -> Result<()> {
    let settings = resolve(path)?;
    print_value(&settings, !yaml, yaml)
}

/// Load the config directory and resolve it once.
pub fn resolve(path: &Path) -> Result<ProxySettings> {
    let config = Arc::new(load_config(path)?.config);
    let networking = Arc::new(SharedNetworkingConfig::new(config.networking));
    let fetch_timeout = config.discovery.fetch_timeout();
    let resolver = build_resolver(config, networking);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build Tokio runtime")?;

    rt.block_on(resolver.get_settings_within(fetch_timeout))
        .context("failed to resolve proxy settings")
}
