//! Google Apps Script collection endpoint
//!
//! The deployed script answers `{"action": "getCollection"}` with
//! `{"data": [{"qty": .., "name": .., "set": .., "number": ..}, ...]}`.
//! Spreadsheet cells come back as strings or numbers depending on how they
//! were typed, so every field is read leniently.

use super::{CollectionSource, USER_AGENT};
use crate::collection::TABLE_HEADER;
use serde::Deserialize;
use serde_json::Value;
use tcg_common::{CheckerError, Result};

const SCRIPT_BASE_URL: &str = "https://script.google.com/macros/s";

/// A payload without `data` (e.g. a script error object) fails to parse
#[derive(Debug, Deserialize)]
struct CollectionResponse {
    data: Vec<CollectionItem>,
}

/// One row as served by the script
#[derive(Debug, Deserialize, Default)]
pub(crate) struct CollectionItem {
    #[serde(default)]
    qty: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    set: Value,
    #[serde(default)]
    number: Value,
}

/// Render a JSON cell as table text; null and structured values become empty
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Convert script rows into collection table text (header included)
pub(crate) fn items_to_table(items: &[CollectionItem]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    let to_csv_err = |e: csv::Error| CheckerError::Csv(e.to_string());

    wtr.write_record(TABLE_HEADER).map_err(to_csv_err)?;
    for item in items {
        wtr.write_record([
            cell_text(&item.qty),
            String::new(),
            cell_text(&item.name),
            cell_text(&item.set),
            cell_text(&item.number),
        ])
        .map_err(to_csv_err)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| CheckerError::Csv(e.to_string()))?;
    String::from_utf8(data).map_err(|e| CheckerError::Csv(e.to_string()))
}

/// Collection source backed by a deployed Apps Script
#[derive(Debug, Clone)]
pub struct GoogleScriptSource {
    client: reqwest::Client,
    url: String,
}

impl GoogleScriptSource {
    pub fn new(deployment_id: &str) -> Self {
        Self::with_url(format!("{}/{}/exec", SCRIPT_BASE_URL, deployment_id))
    }

    /// Point at an explicit endpoint URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw script rows
    async fn fetch_items(&self) -> Result<Vec<CollectionItem>> {
        log::info!("Fetching collection from Google Script...");

        let response = self
            .client
            .post(&self.url)
            .header("User-Agent", USER_AGENT)
            .json(&serde_json::json!({ "action": "getCollection" }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CheckerError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let parsed: CollectionResponse = serde_json::from_str(&body)?;

        log::info!("Fetched {} collection rows", parsed.data.len());
        Ok(parsed.data)
    }
}

impl CollectionSource for GoogleScriptSource {
    async fn fetch_table(&self) -> Result<String> {
        let items = self.fetch_items().await?;
        items_to_table(&items)
    }
}

#[cfg(test)]
#[path = "google_script_tests.rs"]
mod tests;
