use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use toolshare_core::ToolshareConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a subscriber that appends to `config.log_path`.
///
/// `RUST_LOG` takes precedence over `config.log_filter`. The terminal is
/// owned by the UI, so nothing is written to stdout or stderr.
pub fn init(config: &ToolshareConfig) -> Result<()> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let filter_layer = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
