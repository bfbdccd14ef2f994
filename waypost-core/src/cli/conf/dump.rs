use crate::conf::{load_config, load_spec_config};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

pub fn dump(
    path: PathBuf,
    json: bool,
    yaml: bool,
    repr: RepresentationFormat,
) -> anyhow::Result<()> {
    match repr {
        RepresentationFormat::Dsl => {
            let (_, spec) = load_spec_config(&path)?;
            print_value(&spec, json, yaml)
        }
        RepresentationFormat::Runtime => {
            let cfg = load_config(&path)?;
            print_value(&cfg.config, json, yaml)
        }
    }
}

/// Prints JSON unless YAML was asked for.
pub fn print_value<T: Serialize>(value: &T, json: bool, yaml: bool) -> anyhow::Result<()> {
    println!("{}", render_value(value, json, yaml)?);
    Ok(())
}

pub fn render_value<T: Serialize>(value: &T, json: bool, yaml: bool) -> anyhow::Result<String> {
    if yaml && !json {
        Ok(serde_yaml::to_string(value)?)
    } else {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[derive(Clone, Debug)]
pub enum RepresentationFormat {
    Dsl,
    Runtime,
}

impl FromStr for RepresentationFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dsl" => Ok(Self::Dsl),
            "runtime" => Ok(Self::Runtime),
            _ => Err(anyhow::anyhow!("invalid output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn runtime_config_renders_as_json_by_default() {
        // Arrange
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "server {\n  version = 1\n}\n\nproxy {\n  web_listen_addr = \"0.0.0.0:3080\"\n}\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap().config;

        // Act
        let rendered = render_value(&config, false, false).unwrap();

        // Assert
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["proxy"]["web_listen_addr"], "0.0.0.0:3080");
        assert_eq!(value["networking"]["proxy_listener_mode"], "separate");
    }

    #[test]
    fn yaml_is_used_only_when_asked_for() {
        // Arrange
        let value = serde_json::json!({ "listen_addr": "0.0.0.0:3023" });

        // Act
        let yaml = render_value(&value, false, true).unwrap();
        let both = render_value(&value, true, true).unwrap();

        // Assert
        let parsed: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, value);
        assert!(!yaml.starts_with('{'));
        assert!(both.starts_with('{'));
    }

    #[test]
    fn representation_format_parses_known_names() {
        assert!(matches!("dsl".parse(), Ok(RepresentationFormat::Dsl)));
        assert!(matches!("runtime".parse(), Ok(RepresentationFormat::Runtime)));
        assert!("ir".parse::<RepresentationFormat>().is_err());
    }
}
