//! Published Google Sheet CSV export
//!
//! The sheet's column order must already match the collection table layout;
//! the text is handed over unchanged.

use super::{CollectionSource, USER_AGENT};
use tcg_common::{CheckerError, Result};

#[derive(Debug, Clone)]
pub struct SheetCsvSource {
    client: reqwest::Client,
    url: String,
}

impl SheetCsvSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CollectionSource for SheetCsvSource {
    async fn fetch_table(&self) -> Result<String> {
        log::info!("Downloading collection CSV from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CheckerError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}
