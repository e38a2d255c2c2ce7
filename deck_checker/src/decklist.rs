//! Decklist parsing
//!
//! Turns pasted decklist text into required-card entries. Entries look like
//! `<qty> <name with spaces> <set> <number>`; the set code and number are
//! always the last two tokens, so the name is whatever sits in between.

use crate::utils::parse_quantity;
use log::debug;
use tcg_common::{CardPrinting, RequiredCard};

/// Built-in deck used when no decklist text is supplied
pub const DEFAULT_DECK: &str = "Pokemon
2 Weedle A2b 1
2 Kakuna A2b 2
1 Beedrill ex A2b 3
1 Pinsir A2b 4
2 Sprigatito A2b 5
2 Floragato A2b 6
1 Meowscarada A2b 7
2 Buneary A2b 66
1 Lopunny A2b 67

Supporter
1 Red A2b 71
2 Professor’s Research PROMO 7

Item
1 X Speed PROMO 2
2 Poké Ball PROMO 5";

/// Result of parsing a decklist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeck {
    pub required: Vec<RequiredCard>,
    /// Candidate lines that failed extraction, verbatim (untrimmed)
    pub invalid_lines: Vec<String>,
}

impl ParsedDeck {
    /// Sum of needed copies across all entries
    pub fn total_needed(&self) -> u64 {
        self.required.iter().map(|c| u64::from(c.needed_qty)).sum()
    }
}

/// Parse decklist text.
///
/// Only lines starting with a digit (after trimming) are considered; section
/// headers such as "Pokemon" or "Item" and blank lines are skipped without
/// being reported.
pub fn parse(text: &str) -> ParsedDeck {
    let mut deck = ParsedDeck::default();

    for raw in text.split('\n') {
        let line = raw.trim();
        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        match parse_entry(line) {
            Some(card) => deck.required.push(card),
            None => {
                debug!("Ignoring malformed decklist line: {:?}", raw);
                deck.invalid_lines.push(raw.to_string());
            }
        }
    }

    debug!(
        "Parsed decklist: {} entries, {} invalid lines",
        deck.required.len(),
        deck.invalid_lines.len()
    );
    deck
}

fn parse_entry(line: &str) -> Option<RequiredCard> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [qty, name @ .., set, number] = tokens.as_slice() else {
        return None;
    };
    if name.is_empty() {
        return None;
    }

    let needed_qty = parse_quantity(qty).filter(|&q| q > 0)?;
    let printing = CardPrinting::new(name.join(" "), *set, *number);
    Some(RequiredCard::new(printing, needed_qty))
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
