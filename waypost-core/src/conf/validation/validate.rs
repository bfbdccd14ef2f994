use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigVersion, EntrypointSpec, ProxySpec};
use crate::conf::validation::validators::{validate_addr, validate_addr_list, validate_version};
use crate::conf::validation::ValidationReport;
use crate::networking::ProxyListenerMode;
use std::path::Path;

/// Semantic validation of a parsed config file.
///
/// The version is checked first and fails fast. Everything else is collected
/// into a single report so operators see every problem at once. Returns the
/// report (possibly carrying warnings) when there are no errors.
pub fn validate_spec_config(
    spec: &EntrypointSpec,
    file: &Path,
) -> Result<ValidationReport, ConfigError> {
    let version = validate_version(spec.server.version)?;
    let mut report = ValidationReport::new(file);

    validate_proxy(&spec.proxy, &mut report);

    let mode = spec
        .networking
        .proxy_listener_mode
        .parse::<ProxyListenerMode>();
    if let Err(mode) = &mode {
        report.error(
            "networking.proxy_listener_mode",
            format!("unknown proxy listener mode '{mode}'"),
            Some("expected \"separate\" or \"multiplex\"".to_string()),
        );
    }

    if spec.discovery.fetch_timeout_ms == 0 {
        report.error(
            "discovery.fetch_timeout_ms",
            "fetch timeout must be greater than zero".to_string(),
            None,
        );
    }

    if version == ConfigVersion::V2 && matches!(mode, Ok(ProxyListenerMode::Multiplex)) {
        warn_collapsed_listeners(&spec.proxy, &mut report);
    }

    if report.has_errors() {
        return Err(ConfigError::Validation { report });
    }

    Ok(report)
}

fn validate_proxy(proxy: &ProxySpec, report: &mut ValidationReport) {
    if proxy.web_listen_addr.trim().is_empty() {
        report.error(
            "proxy.web_listen_addr",
            "web listen address is required".to_string(),
            Some("e.g. web_listen_addr = \"0.0.0.0:3080\"".to_string()),
        );
    } else {
        validate_addr(&proxy.web_listen_addr, "proxy.web_listen_addr", report);
    }
    validate_addr_list(&proxy.public_addrs, "proxy.public_addrs", report);

    validate_addr(&proxy.ssh.listen_addr, "proxy.ssh.listen_addr", report);
    validate_addr(
        &proxy.ssh.tunnel_listen_addr,
        "proxy.ssh.tunnel_listen_addr",
        report,
    );
    validate_addr_list(&proxy.ssh.public_addrs, "proxy.ssh.public_addrs", report);
    validate_addr_list(
        &proxy.ssh.tunnel_public_addrs,
        "proxy.ssh.tunnel_public_addrs",
        report,
    );

    validate_addr(&proxy.kube.listen_addr, "proxy.kube.listen_addr", report);
    validate_addr_list(&proxy.kube.public_addrs, "proxy.kube.public_addrs", report);
    if !proxy.kube.enabled
        && (!proxy.kube.listen_addr.trim().is_empty() || !proxy.kube.public_addrs.is_empty())
    {
        report.warning(
            "proxy.kube",
            "kube addresses are configured but the kube proxy is disabled".to_string(),
            Some("set enabled = true to advertise them to clients".to_string()),
        );
    }

    validate_addr(&proxy.mysql.listen_addr, "proxy.mysql.listen_addr", report);
    validate_addr_list(&proxy.mysql.public_addrs, "proxy.mysql.public_addrs", report);

    validate_addr(
        &proxy.postgres.listen_addr,
        "proxy.postgres.listen_addr",
        report,
    );
    validate_addr_list(
        &proxy.postgres.public_addrs,
        "proxy.postgres.public_addrs",
        report,
    );
}

fn warn_collapsed_listeners(proxy: &ProxySpec, report: &mut ValidationReport) {
    let listeners = [
        ("proxy.ssh.listen_addr", &proxy.ssh.listen_addr),
        ("proxy.ssh.tunnel_listen_addr", &proxy.ssh.tunnel_listen_addr),
        ("proxy.kube.listen_addr", &proxy.kube.listen_addr),
        ("proxy.mysql.listen_addr", &proxy.mysql.listen_addr),
        ("proxy.postgres.listen_addr", &proxy.postgres.listen_addr),
    ];

    for (section, addr) in listeners {
        if !addr.trim().is_empty() {
            report.warning(
                section,
                format!(
                    "'{addr}' is advertised to clients as the web listener '{}' in multiplex mode",
                    proxy.web_listen_addr
                ),
                None,
            );
        }
    }
}
