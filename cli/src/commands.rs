//! cli/commands.rs
//! Subcommands. Each one resolves its inputs against the loaded settings and
//! returns the process exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ledgerbase_core::crypto::{Encryptor, SecretKey};
use ledgerbase_core::scan::{
    convert_markdown_tree, find_unannotated, generate_docs, run, ScanConfig, ValidationMode,
};
use ledgerbase_core::settings::AppConfig;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print freshly generated secret keys
    Keygen {
        /// How many keys to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Encrypt a value with the primary key
    Encrypt {
        value: String,
    },
    /// Decrypt a token with any configured key
    Decrypt {
        token: String,
    },
    /// Re-encrypt a token under the primary key
    Rotate {
        token: String,
    },
    /// Validate file headers under a directory
    Validate(ValidateArgs),
    /// List files without a header block as JSON
    Unannotated {
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Write the listing here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate reStructuredText pages from file headers
    Docs {
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        #[arg(long, value_name = "DIR")]
        out: PathBuf,
    },
    /// Rewrite Markdown comment headers as front matter
    Convert {
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Typed schema check, every violation reported
    #[arg(long, conflicts_with = "simple")]
    strict: bool,
    /// Missing fields and date format only
    #[arg(long)]
    simple: bool,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

impl Commands {
    pub fn run(self, config: &AppConfig) -> Result<ExitCode> {
        match self {
            Commands::Keygen { count } => {
                for _ in 0..count {
                    println!("{}", SecretKey::generate().encode());
                }
            }
            Commands::Encrypt { value } => {
                println!("{}", encryptor(config)?.encrypt(&value)?);
            }
            Commands::Decrypt { token } => {
                println!("{}", encryptor(config)?.decrypt(&token)?);
            }
            Commands::Rotate { token } => {
                println!("{}", encryptor(config)?.rotate(&token)?);
            }
            Commands::Validate(args) => return validate(config, args),
            Commands::Unannotated { root, output } => {
                let cfg = scan_config(config, root.as_deref());
                let files = find_unannotated(&cfg)?;
                let json = serde_json::to_string_pretty(&files)?;
                match output {
                    Some(path) => {
                        fs::write(&path, json + "\n")
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        info!(files = files.len(), path = %path.display(), "unannotated listing written");
                    }
                    None => println!("{json}"),
                }
            }
            Commands::Docs { root, out } => {
                let cfg = scan_config(config, root.as_deref());
                let summary = generate_docs(&cfg, &out)?;
                println!(
                    "Generated {} page(s) in {} categor{}.",
                    summary.pages,
                    summary.indexes.len(),
                    if summary.indexes.len() == 1 { "y" } else { "ies" }
                );
            }
            Commands::Convert { root, dry_run } => {
                let root = root.unwrap_or_else(|| config.scan.root.clone());
                let summary = convert_markdown_tree(&root, dry_run)?;
                let verb = if dry_run { "Would convert" } else { "Converted" };
                for path in &summary.converted {
                    println!("{verb} {}", path.display());
                }
                for failure in &summary.failed {
                    println!("❌ Could not convert {}: {}", failure.path.display(), failure.reason);
                }
                println!(
                    "{verb} {} file(s), {} failed.",
                    summary.converted.len(),
                    summary.failed.len()
                );
                if !summary.failed.is_empty() {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn encryptor(config: &AppConfig) -> Result<Encryptor> {
    Encryptor::from_config(&config.encryption()).context("no usable secret keys configured")
}

fn scan_config(config: &AppConfig, root: Option<&Path>) -> ScanConfig {
    let mut cfg = config.scan.clone();
    if let Some(root) = root {
        cfg.root = root.to_path_buf();
    }
    cfg
}

fn validate(config: &AppConfig, args: ValidateArgs) -> Result<ExitCode> {
    let mut cfg = scan_config(config, args.root.as_deref());
    if args.strict {
        cfg.mode = ValidationMode::Strict;
    } else if args.simple {
        cfg.mode = ValidationMode::Simple;
    }

    let report = run(&cfg)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(if report.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
