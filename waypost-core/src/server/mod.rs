mod pid;
mod reload;
pub mod setup;

pub use reload::{ReloadEvent, ReloadHandle, reload_networking_config};
pub use setup::{DEFAULT_WEB_PORT, build_pingora_server, build_resolver, run};
