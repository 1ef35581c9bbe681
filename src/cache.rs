use crate::error::{Result, SeoError};
use crate::types::report::PurgeOutcome;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_DIR: &str = ".seoboard/cache";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub trait CacheInvalidator {
    fn purge(&self) -> Result<usize>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    stored_at: DateTime<Utc>,
    body: String,
}

/// Rendered-output cache stored as one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
    max_age_secs: u64,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>, max_age_secs: u64) -> Self {
        Self {
            dir: dir.into(),
            max_age_secs,
        }
    }

    pub fn for_site(root: &Path, max_age_secs: u64) -> Self {
        Self::new(root.join(DEFAULT_CACHE_DIR), max_age_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.get_at(key, Utc::now())
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        let raw = fs::read_to_string(self.entry_path(key)).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable cache entry");
                return None;
            }
        };
        let age = now.signed_duration_since(entry.stored_at).num_seconds();
        if entry.key != key || age < 0 || age as u64 >= self.max_age_secs {
            tracing::debug!(key, age, "cache miss (stale)");
            return None;
        }
        tracing::debug!(key, age, "cache hit");
        Some(entry.body)
    }

    pub fn put(&self, key: &str, body: &str) -> Result<()> {
        self.put_at(key, body, Utc::now())
    }

    fn put_at(&self, key: &str, body: &str, now: DateTime<Utc>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let entry = CacheEntry {
            key: key.to_string(),
            stored_at: now,
            body: body.to_string(),
        };
        fs::write(self.entry_path(key), serde_json::to_string(&entry)?)?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        let name: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl CacheInvalidator for FileCache {
    fn purge(&self) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path).map_err(|e| {
                    SeoError::Cache(format!("failed to remove {}: {}", path.display(), e))
                })?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Runs the purge and reports the outcome instead of failing.
pub fn purge_caches(invalidator: &dyn CacheInvalidator) -> PurgeOutcome {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    match invalidator.purge() {
        Ok(removed) => {
            tracing::info!(removed, "cache purged");
            PurgeOutcome {
                success: true,
                message: format!("cache purged ({removed} entries removed)"),
                timestamp,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "cache purge failed");
            PurgeOutcome {
                success: false,
                message: format!("cache purge failed: {e}"),
                timestamp,
            }
        }
    }
}
