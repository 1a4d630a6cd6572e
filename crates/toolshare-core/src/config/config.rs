use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Example `~/.toolshare/config.json` or project-local `.toolshare.json`:
/// ```json
/// {
///   "store_path": "/srv/toolshare/store.json",
///   "log_filter": "toolshare_core=debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolshareConfig {
    /// JSON file backing the key-value store.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Log output file. The terminal belongs to the UI, so logs go here.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_store_path() -> PathBuf {
    ToolshareConfig::resolve_path("store.json")
}

fn default_log_path() -> PathBuf {
    ToolshareConfig::resolve_path("toolshare.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ToolshareConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_path: default_log_path(),
            log_filter: default_log_filter(),
        }
    }
}

impl ToolshareConfig {
    /// Load `~/.toolshare/config.json`, overlay `./.toolshare.json`, then
    /// apply `TOOLSHARE_STORE`.
    pub fn load() -> Result<Self> {
        let local = std::env::current_dir()
            .ok()
            .map(|d| d.join(".toolshare.json"));
        let mut config = Self::load_from(&Self::resolve_path("config.json"), local.as_deref())?;

        if let Ok(store) = std::env::var("TOOLSHARE_STORE") {
            if !store.is_empty() {
                config.store_path = PathBuf::from(store);
            }
        }
        Ok(config)
    }

    /// Layer a global config file and an optional local override. Missing
    /// files are skipped; keys in the local file replace global ones.
    pub fn load_from(global: &Path, local: Option<&Path>) -> Result<Self> {
        let mut config = if global.exists() {
            let data = std::fs::read_to_string(global)?;
            serde_json::from_str::<ToolshareConfig>(&data)?
        } else {
            ToolshareConfig::default()
        };

        if let Some(local) = local.filter(|p| p.exists()) {
            let data = std::fs::read_to_string(local)?;
            let override_val: serde_json::Value = serde_json::from_str(&data)?;
            let mut base = serde_json::to_value(&config)?;
            if let (Some(base_obj), Some(over_obj)) =
                (base.as_object_mut(), override_val.as_object())
            {
                for (k, v) in over_obj {
                    base_obj.insert(k.clone(), v.clone());
                }
            }
            config = serde_json::from_value(base)?;
        }

        Ok(config)
    }

    pub fn resolve_path(relative: &str) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".toolshare")
            .join(relative)
    }
}
