mod logging;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use toolshare_core::{AppState, FileStore, InMemoryStore, KvStore, ToolshareConfig};
use tracing::{info, warn};

/// ToolShare Club: lend and borrow tools within your community.
#[derive(Debug, Parser)]
#[command(name = "toolshare", version)]
struct Args {
    /// JSON file used as the local key-value store.
    #[arg(long, env = "TOOLSHARE_STORE")]
    store: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk. Wins over
    /// `--store`.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_err) = resolve_config(ToolshareConfig::load(), args.store);
    logging::init(&config)?;
    if let Some(e) = config_err {
        warn!("Ignoring unreadable config, using defaults: {:#}", e);
    }

    let store: Box<dyn KvStore> = if args.ephemeral {
        info!("using in-memory store");
        Box::new(InMemoryStore::new())
    } else {
        info!(path = %config.store_path.display(), "using file store");
        Box::new(FileStore::open(&config.store_path))
    };

    ui::run(AppState::open(store)).await
}

/// Fall back to defaults on a bad config, handing the error back so it can
/// be logged once logging exists. `--store` applies either way.
fn resolve_config(
    loaded: Result<ToolshareConfig>,
    store: Option<PathBuf>,
) -> (ToolshareConfig, Option<anyhow::Error>) {
    let (mut config, err) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (ToolshareConfig::default(), Some(e)),
    };
    if let Some(store) = store {
        config.store_path = store;
    }
    (config, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_config_falls_back_but_keeps_error() {
        let loaded = Err(anyhow::anyhow!("expected value at line 1 column 1"));
        let (config, err) = resolve_config(loaded, None);
        assert_eq!(config, ToolshareConfig::default());
        let err = err.expect("error kept");
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn store_flag_overrides_loaded_or_default_config() {
        let (config, err) = resolve_config(Ok(ToolshareConfig::default()), Some("/tmp/a.json".into()));
        assert!(err.is_none());
        assert_eq!(config.store_path, PathBuf::from("/tmp/a.json"));

        let (config, err) = resolve_config(Err(anyhow::anyhow!("bad")), Some("/tmp/b.json".into()));
        assert!(err.is_some());
        assert_eq!(config.store_path, PathBuf::from("/tmp/b.json"));
    }
}
