use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Server logging: one JSON object per event on stdout.
///
/// Level filtering comes from `RUST_LOG` and defaults to `info`. Event fields
/// are flattened into the top-level object so log shippers can index them.
pub fn init_server_logging() {
    // tokio-console installs its own subscriber; never stack ours on top.
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
        return;
    }

    fmt()
        .with_env_filter(env_filter("info"))
        .json()
        .flatten_event(true)
        .init();
}

/// CLI logging: compact human-readable events on stderr, warnings and up.
///
/// Commands such as `settings` and `config dump` print machine-readable
/// output on stdout, which must stay clean.
pub fn init_cli_logging() {
    fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
