use super::*;
use crate::collection;
use crate::decklist;
use crate::reconcile::{reconcile, SubstitutionRule};
use chrono::{TimeZone, Utc};

fn metadata() -> SnapshotMetadata {
    SnapshotMetadata {
        fetched_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
    }
}

fn render_for(deck_text: &str, table: &str) -> String {
    let deck = decklist::parse(deck_text);
    let collection = collection::index(table);
    let deficits = reconcile(&deck.required, &collection, SubstitutionRule::DifferentSet);
    render(&deck, &deficits, &collection, &metadata())
}

#[test]
fn renders_missing_cards_with_suggestions() {
    let report = render_for(
        "Pokemon\n2 Weedle A2b 1\n1 Beedrill ex A2b 3",
        "Normal,Foil,Name,Set,Number\n1,,Weedle,A2b,1\n0,,Beedrill ex,A2b,3\n2,,Beedrill ex,A1,3",
    );

    let expected = "Deck entries: 2\n\
Progress: 1/3 owned.\n\
\n\
📋 Deck List:\n\
- 2× Weedle (A2b-1) — Owned: 1\n\
- 1× Beedrill ex (A2b-3) — Owned: 0\n\
\n\
❌ Missing Cards:\n\
- 1× Weedle (A2b-1)\n\
- 1× Beedrill ex (A2b-3)\n\
\x20 Suggestions:\n\
\x20   • 2× Beedrill ex (A1-3)\n\
\n\
\n\
Based on data last updated on: 2025-06-01 09:30:00 UTC";

    assert_eq!(report, expected);
}

#[test]
fn renders_complete_marker_when_nothing_missing() {
    let report = render_for(
        "1 Mew A1a 77",
        "Normal,Foil,Name,Set,Number\n1,,Mew,A1a,77",
    );

    assert!(report.contains("Progress: 1/1 owned."));
    assert!(report.contains("\n\n✅ Deck complete!\n"));
    assert!(!report.contains("Missing Cards"));
}

#[test]
fn lists_ignored_lines_verbatim() {
    let report = render_for(
        "0 Weedle A2b 1\n2 Kakuna\n1 Mew A1a 77",
        "Normal,Foil,Name,Set,Number",
    );

    assert!(report.starts_with("Deck entries: 1\nIgnored (2): 0 Weedle A2b 1, 2 Kakuna\n"));
}

#[test]
fn omits_ignored_section_when_empty() {
    let report = render_for("1 Mew A1a 77", "Normal,Foil,Name,Set,Number");
    assert!(!report.contains("Ignored"));
}

#[test]
fn progress_never_exceeds_total_needed() {
    let report = render_for(
        "2 Weedle A2b 1\n2 Kakuna A2b 2",
        "Normal,Foil,Name,Set,Number\n10,,Weedle,A2b,1\n1,,Kakuna,A2b,2",
    );

    assert!(report.contains("Progress: 3/4 owned."));
    // Over-ownership is still shown in the deck list
    assert!(report.contains("- 2× Weedle (A2b-1) — Owned: 10"));
}

#[test]
fn owned_capped_sums_per_card_minimum() {
    let deck = decklist::parse(decklist::DEFAULT_DECK);
    let table = "Normal,Foil,Name,Set,Number\n9,,Weedle,A2b,1\n1,,Kakuna,A2b,2";
    let collection = collection::index(table);

    assert_eq!(owned_capped(&deck, &collection), 3);
    assert!(owned_capped(&deck, &collection) <= deck.total_needed());
}

#[test]
fn suggestions_header_only_when_suggestions_exist() {
    let report = render_for("1 Mew A1a 77", "Normal,Foil,Name,Set,Number");
    assert!(report.contains("- 1× Mew (A1a-77)"));
    assert!(!report.contains("Suggestions"));
}

#[test]
fn empty_deck_renders_zero_progress() {
    let report = render_for("", "Normal,Foil,Name,Set,Number");
    assert!(report.starts_with("Deck entries: 0\nProgress: 0/0 owned.\n"));
    assert!(report.contains("✅ Deck complete!"));
}

#[test]
fn rendering_is_byte_identical_across_calls() {
    let deck_text = decklist::DEFAULT_DECK;
    let table = "Normal,Foil,Name,Set,Number\n1,,Weedle,A1,1\n2,,Red,P-A,7";
    assert_eq!(render_for(deck_text, table), render_for(deck_text, table));
}

#[test]
fn ends_with_freshness_line() {
    let report = render_for("1 Mew A1a 77", "Normal,Foil,Name,Set,Number");
    assert!(report.ends_with("\n\n\nBased on data last updated on: 2025-06-01 09:30:00 UTC"));
}
