//! Collection sources (Google Apps Script endpoint, published sheet CSV)

pub mod google_script;
pub mod sheet_csv;

pub use google_script::GoogleScriptSource;
pub use sheet_csv::SheetCsvSource;

use std::future::Future;
use tcg_common::Result;

/// Something that can hand over a fresh collection table.
///
/// The returned text uses the collection table layout: a header line, then
/// `quantity, (reserved), name, set, number` rows.
pub trait CollectionSource {
    fn fetch_table(&self) -> impl Future<Output = Result<String>>;
}

/// User-Agent sent with every request
pub(crate) const USER_AGENT: &str = "deck_checker/0.1";
