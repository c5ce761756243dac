use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::recent::DEFAULT_RECENT_KEY;
use crate::store::FileBlobStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Where and how the recent list is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding blob files (default: platform data dir + `locsearch`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Key the recent list is stored under (default: "search_list").
    #[serde(default = "default_recent_key")]
    pub recent_key: String,
    /// Write blobs from a background thread instead of inline (default: false).
    #[serde(default)]
    pub deferred_writes: bool,
}

/// Catalog and query settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Upper bound on matches per query. Unlimited when unset.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// JSON catalog file. The built-in sample catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_recent_key() -> String {
    DEFAULT_RECENT_KEY.to_string()
}

impl StorageConfig {
    /// Configured data directory, or the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(FileBlobStore::default_dir)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            recent_key: default_recent_key(),
            deferred_writes: false,
        }
    }
}
