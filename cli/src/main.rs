//! ledgerbase
//!
//! Command-line front end: key management, value encryption and header
//! validation over a source tree.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ledgerbase_core::settings::{AppConfig, LogFormat};

mod commands;
mod logging;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "ledgerbase")]
#[command(version)]
#[command(about = "Header metadata checks and key-rotating secret encryption")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML). Defaults to ./ledgerbase.toml when present.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `ledgerbase_core=trace`.
    #[arg(short, long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// pretty, compact or json.
    #[arg(long, value_name = "FORMAT", global = true)]
    log_format: Option<String>,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load settings")?;

    let level = cli.log_level.as_deref().unwrap_or(config.log.level.as_str());
    let format = match cli.log_format.as_deref() {
        Some(f) => f.parse::<LogFormat>()?,
        None => config.log.format,
    };
    logging::init_logging(level, format)?;

    cli.command.run(&config)
}
