//! Deck vs. collection reconciliation
//!
//! For every decklist entry the collection is checked for the exact printing.
//! Entries that fall short get a deficit record listing other owned printings
//! of the same card that could stand in for the missing copies.

use crate::collection::CollectionIndex;
use serde::{Deserialize, Serialize};
use tcg_common::{OwnedPrinting, RequiredCard};

/// Which owned printings count as substitutes for a missing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionRule {
    /// Same name from a different set
    #[default]
    DifferentSet,
    /// Same name, any other printing (same set with another number allowed)
    DifferentPrinting,
}

impl SubstitutionRule {
    /// Whether `candidate` may substitute for `card`
    pub fn allows(&self, card: &RequiredCard, candidate: &OwnedPrinting) -> bool {
        if candidate.owned_qty == 0 || !candidate.same_name_as(card.name()) {
            return false;
        }
        match self {
            SubstitutionRule::DifferentSet => candidate.set_code() != card.set_code(),
            SubstitutionRule::DifferentPrinting => candidate.key != card.key,
        }
    }
}

/// A decklist entry the collection cannot cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deficit {
    pub key: String,
    pub name: String,
    pub set_code: String,
    pub needed_qty: u32,
    pub owned_qty: u32,
    /// `needed_qty - owned_qty`, always positive
    pub shortfall: u32,
    /// In collection order
    pub substitutions: Vec<OwnedPrinting>,
}

/// Compute deficits for `required`, in decklist order.
pub fn reconcile(
    required: &[RequiredCard],
    collection: &CollectionIndex,
    rule: SubstitutionRule,
) -> Vec<Deficit> {
    required
        .iter()
        .filter_map(|card| {
            let owned_qty = collection.owned_qty(&card.key);
            if owned_qty >= card.needed_qty {
                return None;
            }

            let substitutions = collection
                .iter()
                .filter(|candidate| rule.allows(card, candidate))
                .cloned()
                .collect();

            Some(Deficit {
                key: card.key.clone(),
                name: card.name().to_string(),
                set_code: card.set_code().to_string(),
                needed_qty: card.needed_qty,
                owned_qty,
                shortfall: card.needed_qty - owned_qty,
                substitutions,
            })
        })
        .collect()
}
