use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waypost_core::cli;
use waypost_core::cli::conf::ConfigCmd;
use waypost_core::conf::load_config;
use waypost_core::logging::{init_cli_logging, init_server_logging};
use waypost_core::server;

#[derive(Parser, Debug)]
#[command(
    name = "waypost",
    version,
    about = "Waypost: proxy settings discovery for cluster clients"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the discovery server (default)
    Run {
        /// Path to the config directory
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    /// Print the proxy settings clients would receive
    Settings {
        /// Path to the config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Output as YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Ask a running server to reload its networking config
    Reload {
        /// Pid file of the running server
        #[arg(long)]
        pid_file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Settings { path, yaml }) => {
            init_cli_logging();
            cli::settings::run(&path, yaml)
        }

        Some(Command::Config { cmd }) => {
            init_cli_logging();
            cli::conf::run(cmd)
        }

        Some(Command::Reload { pid_file }) => {
            init_cli_logging();
            cli::reload::run(pid_file)
        }

        Some(Command::Run { config }) => {
            init_server_logging();
            run_server(config)
        }

        None => {
            init_server_logging();
            run_server(PathBuf::from("config"))
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "waypost failed");
        eprintln!("waypost: {e:#}");
        std::process::exit(1);
    }
}

fn run_server(config_path: PathBuf) -> anyhow::Result<()> {
    let validated = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    server::run(config_path, validated.config)
}
