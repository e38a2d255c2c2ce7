//! Deck Checker - decklist vs. collection gap reports
//!
//! Parses a pasted decklist, compares it with a cached snapshot of the card
//! collection and reports missing copies together with other owned printings
//! that could replace them.

pub mod api;
pub mod cache;
pub mod checker;
pub mod collection;
pub mod config;
pub mod decklist;
pub mod reconcile;
pub mod report;
pub mod utils;
pub mod vault;

// Re-export commonly used items
pub use api::{CollectionSource, GoogleScriptSource, SheetCsvSource};
pub use cache::{needs_refresh, CachedSnapshot, SnapshotMetadata, SnapshotStore, StalenessPolicy};
pub use checker::DeckChecker;
pub use collection::CollectionIndex;
pub use config::{Config, SourceConfig};
pub use decklist::ParsedDeck;
pub use reconcile::{reconcile, Deficit, SubstitutionRule};
pub use tcg_common::{CardPrinting, CheckerError, OwnedPrinting, RequiredCard, Result};
