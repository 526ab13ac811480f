//! Cache file loading and saving.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, WatchError};

use super::CacheEntry;

/// Mapping from application id to its last-observed metadata.
pub type CacheMap = HashMap<String, CacheEntry>;

/// Loads and saves the version cache file.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache, treating absence or corruption as empty.
    ///
    /// An empty result where the file was expected is the cold-start
    /// signal, so this never errors: a missing file, an unreadable file,
    /// or a file that does not parse as an id→entry mapping all yield an
    /// empty map (the latter two with a warning).
    pub fn load(&self) -> CacheMap {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CacheMap::new(),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not read cache file, starting empty"
                );
                return CacheMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Cache file is not a version map, starting empty"
                );
                CacheMap::new()
            }
        }
    }

    /// Save the cache with a whole-file replace.
    ///
    /// Uses the write-to-temp-then-rename pattern so a crash mid-write
    /// never leaves a partially written cache behind.
    pub fn save(&self, cache: &CacheMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content =
            serde_json::to_string_pretty(cache).map_err(|e| WatchError::CacheWrite {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
