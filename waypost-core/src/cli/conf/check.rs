use crate::conf::{ConfigError, load_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(validated) => {
            let cfg = &validated.config;
            let proxy = &cfg.proxy;

            if validated.report.has_violations() {
                render_report(&validated.report, plain);
                println!();
            }

            println!("✔ Config loaded successfully");
            println!("✔ schema {}", cfg.server.version);
            println!(
                "✔ proxy listener mode {}",
                cfg.networking.proxy_listener_mode()
            );
            println!("✔ web listener {}", proxy.web_listen_addr);
            println!(
                "✔ {} services with a dedicated listener",
                [
                    !proxy.ssh.listen_addr.is_empty(),
                    !proxy.ssh.tunnel_listen_addr.is_empty(),
                    proxy.kube.enabled && !proxy.kube.listen_addr.is_empty(),
                    !proxy.mysql.listen_addr.is_empty(),
                    !proxy.postgres.listen_addr.is_empty(),
                ]
                .iter()
                .filter(|configured| **configured)
                .count()
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn render_report(report: &crate::conf::validation::ValidationReport, plain: bool) {
    if plain {
        report.render_plain();
    } else {
        report.render_pretty();
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);

    if let ConfigError::Validation { report } = &err {
        render_report(report, plain);
    } else if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }

    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "The config directory must contain a waypost.hcl file.\n\
             \n\
             Example:\n\
             \n\
             server {\n\
               version = 2\n\
             }\n\
             \n\
             proxy {\n\
               web_listen_addr = \"0.0.0.0:3080\"\n\
             }",
        ),

        ConfigError::InvalidVersion { .. } => Some(
            "Supported schema versions are 1 (one listener per proxy service)\n\
             and 2 (services may share the web listener in multiplex mode).",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn valid_config_passes_check() {
        // Arrange
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
server {
  version = 2
}

proxy {
  web_listen_addr = "0.0.0.0:3080"

  ssh {
    listen_addr = "0.0.0.0:3023"
  }
}

networking {
  proxy_listener_mode = "multiplex"
}
"#,
        )
        .unwrap();

        // Act
        let result = check(dir.path().to_path_buf(), true);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn missing_file_and_bad_version_get_hints() {
        // Arrange
        let dir = tempdir().unwrap();
        let missing = load_config(dir.path()).unwrap_err();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "server {\n  version = 7\n}\n",
        )
        .unwrap();
        let bad_version = load_config(dir.path()).unwrap_err();

        // Act
        let missing_hint = config_error_hint(&missing);
        let version_hint = config_error_hint(&bad_version);

        // Assert
        assert!(missing_hint.is_some_and(|hint| hint.contains("waypost.hcl")));
        assert!(version_hint.is_some_and(|hint| hint.contains("schema versions")));
    }
}
