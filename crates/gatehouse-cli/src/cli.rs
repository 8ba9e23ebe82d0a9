//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use gatehouse_core::config::{self, Config};

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(version = "0.1")]
#[command(about = "Terminal login form")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Prints the config file path
    Path,
    /// Prints the effective configuration
    Show,
    /// Writes the default config file if missing
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => run_form(),
        Some(Commands::Config { command }) => run_config(&command),
    }
}

fn run_form() -> Result<()> {
    let config = Config::load()?;

    // Keep the guard alive so buffered log lines flush on exit.
    let _log_guard = gatehouse_core::logging::init()?;
    tracing::info!(title = %config.title, "starting login form");

    gatehouse_tui::run_form(&config)
}

fn run_config(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", config::paths::config_path().display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = Config::load()?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{rendered}");
            Ok(())
        }
        ConfigCommands::Init => {
            let path = config::paths::config_path();
            if path.exists() {
                println!("Config already exists: {}", path.display());
            } else {
                Config::default().save()?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
