//! End-to-end runs: deck check and vault search
//!
//! Each run acquires one collection snapshot (cached or fetched), indexes it
//! and renders a text report. Any snapshot failure aborts the run.

use crate::api::CollectionSource;
use crate::cache::{acquire_snapshot, CachedSnapshot, SnapshotStore, StalenessPolicy};
use crate::collection;
use crate::decklist::{self, DEFAULT_DECK};
use crate::reconcile::{reconcile, SubstitutionRule};
use crate::report;
use crate::vault::{self, DEFAULT_SEARCH_TERM};
use chrono::{DateTime, Utc};
use tcg_common::Result;

pub struct DeckChecker<S> {
    source: S,
    store: SnapshotStore,
    policy: StalenessPolicy,
    rule: SubstitutionRule,
}

impl<S: CollectionSource> DeckChecker<S> {
    pub fn new(source: S, store: SnapshotStore) -> Self {
        Self {
            source,
            store,
            policy: StalenessPolicy::default(),
            rule: SubstitutionRule::default(),
        }
    }

    pub fn with_policy(mut self, policy: StalenessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_rule(mut self, rule: SubstitutionRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current snapshot, fetched when stale or when `force_refresh` is set
    pub async fn snapshot(&self, force_refresh: bool, now: DateTime<Utc>) -> Result<CachedSnapshot> {
        acquire_snapshot(&self.source, &self.store, &self.policy, now, force_refresh).await
    }

    /// Check a decklist against the collection and return the report text.
    ///
    /// Blank input falls back to the built-in default deck.
    pub async fn check_deck(
        &self,
        deck_text: &str,
        force_refresh: bool,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let deck_text = if deck_text.trim().is_empty() {
            log::info!("No decklist given, using the default deck");
            DEFAULT_DECK
        } else {
            deck_text
        };

        let deck = decklist::parse(deck_text);
        let snapshot = self.snapshot(force_refresh, now).await?;
        let collection = collection::index(&snapshot.table);
        let deficits = reconcile(&deck.required, &collection, self.rule);

        log::info!(
            "Deck check: {} entries, {} missing",
            deck.required.len(),
            deficits.len()
        );
        Ok(report::render(&deck, &deficits, &collection, &snapshot.metadata))
    }

    /// Search the collection by card name and return the result text
    pub async fn search_vault(
        &self,
        term: &str,
        force_refresh: bool,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let term = match term.trim() {
            "" => DEFAULT_SEARCH_TERM,
            t => t,
        };

        let snapshot = self.snapshot(force_refresh, now).await?;
        let collection = collection::index(&snapshot.table);
        let matches = vault::search(&collection, term);
        Ok(vault::render(term, &matches, &snapshot.metadata))
    }
}
