use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigVersion, NetAddr};
use crate::conf::validation::ValidationReport;

/// Validate top-level config version.
///
/// Fail-fast: invalid versions invalidate the entire config model.
pub fn validate_version(version: u32) -> Result<ConfigVersion, ConfigError> {
    ConfigVersion::try_from(version).map_err(|version| ConfigError::InvalidVersion { version })
}

/// Validates a single address, recording a report entry on failure.
///
/// Empty addresses are accepted; they mean "not configured".
pub fn validate_addr(value: &str, section: &str, report: &mut ValidationReport) -> Option<NetAddr> {
    match value.parse::<NetAddr>() {
        Ok(addr) => Some(addr),
        Err(e) => {
            report.error(
                section,
                e.to_string(),
                Some("use host, host:port or [ipv6]:port".to_string()),
            );
            None
        }
    }
}

pub(crate) fn validate_addr_list(values: &[String], section: &str, report: &mut ValidationReport) {
    for (i, value) in values.iter().enumerate() {
        let section = format!("{section}[{i}]");
        if value.trim().is_empty() {
            report.error(&section, "public address must not be empty".to_string(), None);
            continue;
        }
        validate_addr(value, &section, report);
    }
}
