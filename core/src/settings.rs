//! settings.rs
//! Layered application settings.
//!
//! Sources, lowest to highest precedence:
//! - built-in defaults (`AppConfig::default()`),
//! - a TOML file (optional unless named explicitly),
//! - `LEDGERBASE_*` environment variables, `__` between nested keys, e.g.
//!   `LEDGERBASE_SECRET_KEYS=k1,k2` or `LEDGERBASE_SCAN__MODE=simple`.
//!
//! Keys are loaded as strings here; they are only decoded when an `Encryptor`
//! is built from [`AppConfig::encryption`].

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::constants::SECRET_KEYS_SETTING;
use crate::crypto::{CipherSuite, EncryptionConfig};
use crate::scan::ScanConfig;

pub const ENV_PREFIX: &str = "LEDGERBASE";
pub const DEFAULT_CONFIG_FILE: &str = "ledgerbase.toml";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(SettingsError::Invalid {
                key: "log.format",
                reason: format!("unknown format '{other}' (expected pretty, compact or json)"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ordered key strings, primary first.
    pub secret_keys: Vec<String>,
    pub cipher: CipherSuite,
    pub scan: ScanConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load from the process environment and `path` (or `ledgerbase.toml` in the
    /// working directory when present).
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`], with an explicit environment map in place
    /// of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let file = match path {
            Some(p) => File::from(p).format(FileFormat::Toml).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).format(FileFormat::Toml).required(false),
        };

        let cfg: AppConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key(SECRET_KEYS_SETTING)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that do not need key material decoded.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.log.level.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "log.level",
                reason: "must not be empty".to_string(),
            });
        }
        if self.scan.include_exts.is_empty() {
            return Err(SettingsError::Invalid {
                key: "scan.include_exts",
                reason: "at least one extension is required".to_string(),
            });
        }
        Ok(())
    }

    pub fn encryption(&self) -> EncryptionConfig {
        EncryptionConfig {
            secret_keys: self.secret_keys.iter().map(|k| k.trim().to_string()).collect(),
            cipher: self.cipher,
        }
    }
}
