//! Card vault search
//!
//! Looks up every printing in the collection whose name contains a search
//! term and splits the hits into printings already owned and still missing.

use crate::cache::SnapshotMetadata;
use crate::collection::CollectionIndex;
use crate::report::freshness_line;
use tcg_common::OwnedPrinting;

/// Term used when the caller does not supply one
pub const DEFAULT_SEARCH_TERM: &str = "Pikachu";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct VaultMatches<'a> {
    pub owned: Vec<&'a OwnedPrinting>,
    pub missing: Vec<&'a OwnedPrinting>,
}

impl VaultMatches<'_> {
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty() && self.missing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.owned.len() + self.missing.len()
    }
}

/// Case-insensitive substring search over printing names, in collection order
pub fn search<'a>(collection: &'a CollectionIndex, term: &str) -> VaultMatches<'a> {
    let needle = term.trim().to_lowercase();
    let mut matches = VaultMatches::default();

    for printing in collection
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&needle))
    {
        if printing.owned_qty > 0 {
            matches.owned.push(printing);
        } else {
            matches.missing.push(printing);
        }
    }

    log::info!("Found {} matches for \"{}\"", matches.len(), term);
    matches
}

pub fn render(term: &str, matches: &VaultMatches, metadata: &SnapshotMetadata) -> String {
    if matches.is_empty() {
        return format!("No results found for \"{}\".", term);
    }

    let mut output = format!("Search Results for \"{}\":\n\n", term);

    if !matches.owned.is_empty() {
        output.push_str("Already got it:\n");
        for (i, p) in matches.owned.iter().enumerate() {
            output.push_str(&format!(
                "{}.\t  {} {} ({})\n",
                i + 1,
                p.name(),
                p.key,
                p.owned_qty
            ));
        }
        output.push('\n');
    }

    if !matches.missing.is_empty() {
        output.push_str("Still missing:\n");
        for (i, p) in matches.missing.iter().enumerate() {
            output.push_str(&format!("{}.\t {} {}\n", i + 1, p.name(), p.key));
        }
    }

    output.push_str(&format!("\n\n{}", freshness_line(metadata)));
    output
}
