//! Caching layer for collection snapshots

pub mod snapshot_cache;

pub use snapshot_cache::{
    acquire_snapshot, needs_refresh, CachedSnapshot, SnapshotMetadata, SnapshotStore,
    StalenessPolicy, DEFAULT_STALENESS_HOURS, MAX_STALENESS_HOURS,
};
