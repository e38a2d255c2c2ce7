//! Card printing records
//!
//! A printing is one set + number edition of a named card. The same card name
//! can appear under several printings; the key only ever identifies one.

use std::fmt;

/// Build the lookup key for a printing: `<set>-<number>`, taken verbatim.
pub fn printing_key(set_code: &str, card_number: &str) -> String {
    format!("{}-{}", set_code, card_number)
}

/// A specific edition of a card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardPrinting {
    pub set_code: String,
    pub card_number: String,
    pub name: String,
}

impl CardPrinting {
    pub fn new(
        name: impl Into<String>,
        set_code: impl Into<String>,
        card_number: impl Into<String>,
    ) -> Self {
        Self {
            set_code: set_code.into(),
            card_number: card_number.into(),
            name: name.into(),
        }
    }

    /// Identity key of this printing (case-sensitive)
    pub fn key(&self) -> String {
        printing_key(&self.set_code, &self.card_number)
    }
}

impl fmt::Display for CardPrinting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.set_code, self.card_number)
    }
}

/// One decklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredCard {
    pub key: String,
    pub printing: CardPrinting,
    /// Always positive; zero-quantity lines never become entries
    pub needed_qty: u32,
}

impl RequiredCard {
    pub fn new(printing: CardPrinting, needed_qty: u32) -> Self {
        Self {
            key: printing.key(),
            printing,
            needed_qty,
        }
    }

    pub fn name(&self) -> &str {
        &self.printing.name
    }

    pub fn set_code(&self) -> &str {
        &self.printing.set_code
    }

    pub fn card_number(&self) -> &str {
        &self.printing.card_number
    }
}

/// One row of a collection snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedPrinting {
    pub key: String,
    pub printing: CardPrinting,
    pub owned_qty: u32,
}

impl OwnedPrinting {
    pub fn new(printing: CardPrinting, owned_qty: u32) -> Self {
        Self {
            key: printing.key(),
            printing,
            owned_qty,
        }
    }

    pub fn name(&self) -> &str {
        &self.printing.name
    }

    pub fn set_code(&self) -> &str {
        &self.printing.set_code
    }

    pub fn card_number(&self) -> &str {
        &self.printing.card_number
    }

    /// Case-insensitive name comparison, Unicode aware ("Poké Ball")
    pub fn same_name_as(&self, name: &str) -> bool {
        self.printing.name.to_lowercase() == name.to_lowercase()
    }
}
