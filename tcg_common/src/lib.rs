//! Shared types for TCG collection tooling
//!
//! Card printing records used by both the decklist and the collection side,
//! plus the unified error type.

pub mod card;
pub mod error;

pub use card::{printing_key, CardPrinting, OwnedPrinting, RequiredCard};
pub use error::{CheckerError, Error, Result};
