//! Collection snapshot indexing
//!
//! The collection arrives as a comma separated table whose first line is a
//! header. Column positions are fixed by the spreadsheet export:
//! `quantity, (reserved), name, set, number, ...`.

use crate::utils::parse_quantity;
use log::{debug, info};
use std::collections::HashMap;
use tcg_common::{CardPrinting, OwnedPrinting};

const QTY_COLUMN: usize = 0;
const NAME_COLUMN: usize = 2;
const SET_COLUMN: usize = 3;
const NUMBER_COLUMN: usize = 4;
const MIN_FIELDS: usize = 5;

/// Header written in front of tables we produce ourselves
pub const TABLE_HEADER: [&str; MIN_FIELDS] = ["Quantity", "Reserved", "Name", "Set", "Number"];

/// Owned printings keyed by `<set>-<number>`
///
/// Iteration follows first-insertion order. Inserting an existing key replaces
/// the stored printing in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionIndex {
    printings: Vec<OwnedPrinting>,
    positions: HashMap<String, usize>,
}

impl CollectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a printing, overwriting any earlier row with the same key
    pub fn insert(&mut self, printing: OwnedPrinting) {
        match self.positions.get(&printing.key) {
            Some(&pos) => self.printings[pos] = printing,
            None => {
                self.positions
                    .insert(printing.key.clone(), self.printings.len());
                self.printings.push(printing);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&OwnedPrinting> {
        self.positions.get(key).map(|&pos| &self.printings[pos])
    }

    /// Owned copies of a printing, 0 when the key is unknown
    pub fn owned_qty(&self, key: &str) -> u32 {
        self.get(key).map(|p| p.owned_qty).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OwnedPrinting> {
        self.printings.iter()
    }

    pub fn len(&self) -> usize {
        self.printings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printings.is_empty()
    }
}

impl FromIterator<OwnedPrinting> for CollectionIndex {
    fn from_iter<I: IntoIterator<Item = OwnedPrinting>>(iter: I) -> Self {
        let mut index = Self::new();
        for printing in iter {
            index.insert(printing);
        }
        index
    }
}

/// Build an index from raw table text.
///
/// The table is trimmed and its first line is always treated as the header.
/// Every following line is one row: quoting may hide commas inside a field but
/// never spans lines, so an unbalanced quote only costs its own row. Rows that
/// are too short or lack a name, set or number are dropped; unreadable
/// quantities count as 0.
pub fn index(raw_table: &str) -> CollectionIndex {
    let mut row_reader = csv::ReaderBuilder::new();
    row_reader
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);

    let mut collection = CollectionIndex::new();
    let mut dropped = 0usize;

    for (line_no, line) in raw_table.trim().lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let record = match row_reader.from_reader(line.as_bytes()).records().next() {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                debug!("Dropping unreadable collection line {}: {}", line_no + 1, e);
                dropped += 1;
                continue;
            }
            None => continue,
        };

        match owned_from_fields(&record) {
            Some(printing) => collection.insert(printing),
            None => {
                debug!("Dropping incomplete collection line {}: {:?}", line_no + 1, record);
                dropped += 1;
            }
        }
    }

    info!(
        "Indexed {} printings from collection table ({} rows dropped)",
        collection.len(),
        dropped
    );
    collection
}

fn owned_from_fields(record: &csv::StringRecord) -> Option<OwnedPrinting> {
    if record.len() < MIN_FIELDS {
        return None;
    }

    let field = |i: usize| record.get(i).unwrap_or("");
    let (name, set, number) = (field(NAME_COLUMN), field(SET_COLUMN), field(NUMBER_COLUMN));
    if name.is_empty() || set.is_empty() || number.is_empty() {
        return None;
    }

    let owned_qty = parse_quantity(field(QTY_COLUMN)).unwrap_or(0);
    Some(OwnedPrinting::new(
        CardPrinting::new(name, set, number),
        owned_qty,
    ))
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
