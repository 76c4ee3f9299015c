//! cli/logging.rs
//! Subscriber setup. Events go to stderr so stdout stays machine-readable.

use anyhow::{Context, Result};
use ledgerbase_core::settings::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .context("failed to initialise JSON logging")?,
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
            .context("failed to initialise pretty logging")?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
            .context("failed to initialise compact logging")?,
    }

    Ok(())
}
