//! Deck check report formatting
//!
//! The report text is the tool's shareable output, so its layout is fixed:
//! identical inputs always give byte-identical text.

use crate::cache::SnapshotMetadata;
use crate::collection::CollectionIndex;
use crate::decklist::ParsedDeck;
use crate::reconcile::Deficit;

/// Format a snapshot timestamp for the trailing freshness line
pub fn format_fetched_at(metadata: &SnapshotMetadata) -> String {
    metadata
        .fetched_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

/// Trailing line telling the reader how old the collection data is
pub fn freshness_line(metadata: &SnapshotMetadata) -> String {
    format!(
        "Based on data last updated on: {}",
        format_fetched_at(metadata)
    )
}

/// Owned copies counted towards the deck, capped per card at the needed amount
pub fn owned_capped(deck: &ParsedDeck, collection: &CollectionIndex) -> u64 {
    deck.required
        .iter()
        .map(|c| u64::from(collection.owned_qty(&c.key).min(c.needed_qty)))
        .sum()
}

pub fn render(
    deck: &ParsedDeck,
    deficits: &[Deficit],
    collection: &CollectionIndex,
    metadata: &SnapshotMetadata,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Deck entries: {}", deck.required.len()));
    if !deck.invalid_lines.is_empty() {
        lines.push(format!(
            "Ignored ({}): {}",
            deck.invalid_lines.len(),
            deck.invalid_lines.join(", ")
        ));
    }
    lines.push(format!(
        "Progress: {}/{} owned.",
        owned_capped(deck, collection),
        deck.total_needed()
    ));

    lines.push("\n📋 Deck List:".to_string());
    for card in &deck.required {
        lines.push(format!(
            "- {}× {} ({}) — Owned: {}",
            card.needed_qty,
            card.name(),
            card.key,
            collection.owned_qty(&card.key)
        ));
    }

    if deficits.is_empty() {
        lines.push("\n✅ Deck complete!".to_string());
    } else {
        lines.push("\n❌ Missing Cards:".to_string());
        for deficit in deficits {
            lines.push(format!(
                "- {}× {} ({})",
                deficit.shortfall, deficit.name, deficit.key
            ));
            if !deficit.substitutions.is_empty() {
                lines.push("  Suggestions:".to_string());
                for sub in &deficit.substitutions {
                    lines.push(format!(
                        "    • {}× {} ({})",
                        sub.owned_qty, deficit.name, sub.key
                    ));
                }
            }
        }
    }

    lines.push(format!("\n\n{}", freshness_line(metadata)));
    lines.join("\n")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
