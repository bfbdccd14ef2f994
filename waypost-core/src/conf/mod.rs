mod error;
mod loader;
mod lower;
pub mod types;
pub mod validation;

pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, ValidatedConfig, load_config, load_spec_config};
pub use types::DeploymentConfig;
