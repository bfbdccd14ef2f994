use crate::conf::error::ConfigError;
use crate::conf::lower::lower_config;
use crate::conf::types::{DeploymentConfig, EntrypointSpec};
use crate::conf::validation::{ValidationReport, validate_spec_config};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the entrypoint file inside a config directory.
pub const CONFIG_FILE_NAME: &str = "waypost.hcl";

/// Loaded config together with the (warning-only) validation report.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: DeploymentConfig,
    pub report: ValidationReport,
}

pub fn load_config(root: &Path) -> Result<ValidatedConfig, ConfigError> {
    let (path, spec) = load_spec_config(root)?;

    //--------------------------------------------------------------------------
    // Semantic validation (version fails fast, the rest is aggregated)
    //--------------------------------------------------------------------------
    let report = validate_spec_config(&spec, &path)?;

    for warning in &report.warnings {
        tracing::warn!(
            section = %warning.section,
            file = %path.display(),
            "{}",
            warning.message
        );
    }

    Ok(ValidatedConfig {
        config: lower_config(spec),
        report,
    })
}

pub fn load_spec_config(root: &Path) -> Result<(PathBuf, EntrypointSpec), ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let path = root.join(CONFIG_FILE_NAME);
    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let spec: EntrypointSpec =
        hcl::from_str(&contents).map_err(|e| ConfigError::parse(&path, e))?;

    Ok((path, spec))
}
