use crate::api::CollectionSource;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tcg_common::{CheckerError, Result};

/// Age after which a stored snapshot is refetched
pub const DEFAULT_STALENESS_HOURS: i64 = 48;

/// Largest accepted threshold (100 years)
pub const MAX_STALENESS_HOURS: i64 = 24 * 365 * 100;

const TABLE_FILE: &str = "ptcgp.csv";
const META_FILE: &str = "ptcgp.meta.json";

/// When a snapshot was fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub fetched_at: DateTime<Utc>,
}

/// Raw collection table plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSnapshot {
    pub metadata: SnapshotMetadata,
    pub table: String,
}

/// Staleness rule for stored snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessPolicy {
    pub threshold: Duration,
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self {
            threshold: Duration::hours(DEFAULT_STALENESS_HOURS),
        }
    }
}

impl StalenessPolicy {
    /// Threshold of `hours`; `None` when negative or above [`MAX_STALENESS_HOURS`]
    pub fn from_hours(hours: i64) -> Option<Self> {
        if !(0..=MAX_STALENESS_HOURS).contains(&hours) {
            return None;
        }
        Duration::try_hours(hours).map(|threshold| Self { threshold })
    }

    /// True when nothing was fetched yet or the last fetch is older than the
    /// threshold. A fetch time in the future (clock skew) counts as fresh.
    pub fn needs_refresh(&self, last_fetched_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last_fetched_at {
            None => true,
            Some(fetched_at) => now.signed_duration_since(fetched_at) > self.threshold,
        }
    }
}

/// [`StalenessPolicy::needs_refresh`] with the default 48 hour threshold
pub fn needs_refresh(last_fetched_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    StalenessPolicy::default().needs_refresh(last_fetched_at, now)
}

/// On-disk location of the last fetched collection table
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default store directory: ~/.local/share/deck_checker
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deck_checker")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self) -> PathBuf {
        self.dir.join(TABLE_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    /// Load the stored snapshot.
    ///
    /// Returns `Ok(None)` when no table is stored. A table without readable
    /// metadata is also treated as absent so it gets refetched.
    pub fn load(&self) -> Result<Option<CachedSnapshot>> {
        let table_path = self.table_path();
        if !table_path.exists() {
            log::debug!("No stored collection table at {}", table_path.display());
            return Ok(None);
        }

        let metadata = match std::fs::read_to_string(self.meta_path()) {
            Ok(content) => match serde_json::from_str::<SnapshotMetadata>(&content) {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::warn!("Failed to parse snapshot metadata, ignoring stored table: {}", e);
                    return Ok(None);
                }
            },
            Err(e) => {
                log::warn!("Failed to read snapshot metadata, ignoring stored table: {}", e);
                return Ok(None);
            }
        };

        let table = std::fs::read_to_string(&table_path)?;
        Ok(Some(CachedSnapshot { metadata, table }))
    }

    /// Persist a snapshot, replacing any previous one
    pub fn save(&self, snapshot: &CachedSnapshot) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.table_path(), &snapshot.table)?;
        let meta = serde_json::to_string_pretty(&snapshot.metadata)?;
        std::fs::write(self.meta_path(), meta)?;

        log::debug!("Saved collection snapshot to {}", self.dir.display());
        Ok(())
    }
}

/// Return a usable collection snapshot, fetching a new one when needed.
///
/// A fresh stored snapshot is returned unchanged. Otherwise (or when
/// `force_refresh` is set) the source is asked once; its failure aborts with
/// [`CheckerError::SourceUnavailable`]. A failed cache write only logs.
pub async fn acquire_snapshot<S: CollectionSource>(
    source: &S,
    store: &SnapshotStore,
    policy: &StalenessPolicy,
    now: DateTime<Utc>,
    force_refresh: bool,
) -> Result<CachedSnapshot> {
    let stored = match store.load() {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Failed to read stored snapshot, refetching: {}", e);
            None
        }
    };

    let last_fetched_at = stored.as_ref().map(|s| s.metadata.fetched_at);
    if !force_refresh && !policy.needs_refresh(last_fetched_at, now) {
        if let Some(snapshot) = stored {
            log::info!(
                "Using cached collection (fetched {})",
                snapshot.metadata.fetched_at
            );
            return Ok(snapshot);
        }
    }

    if force_refresh {
        log::info!("Refresh requested, downloading collection...");
    } else {
        log::info!("Collection is outdated or missing, downloading...");
    }

    let table = source
        .fetch_table()
        .await
        .map_err(|e| CheckerError::SourceUnavailable(e.to_string()))?;

    let snapshot = CachedSnapshot {
        metadata: SnapshotMetadata { fetched_at: now },
        table,
    };

    if let Err(e) = store.save(&snapshot) {
        log::warn!("Failed to save collection snapshot: {}", e);
    }

    Ok(snapshot)
}

#[cfg(test)]
#[path = "snapshot_cache_tests.rs"]
mod tests;
