//! Configuration file handling
//!
//! Settings live in a JSON file under the user's config directory. A missing
//! file is created with a placeholder deployment id so the user knows what to
//! fill in; the placeholder itself is never used as an endpoint.

use crate::cache::{StalenessPolicy, DEFAULT_STALENESS_HOURS, MAX_STALENESS_HOURS};
use crate::reconcile::SubstitutionRule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tcg_common::{CheckerError, Result};

/// Value written into freshly created config files
pub const DEPLOYMENT_ID_PLACEHOLDER: &str = "YOUR_GOOGLE_DEPLOYMENT_ID_HERE";

/// Where the collection table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    GoogleScript { deployment_id: String },
    SheetCsv { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub google_deployment_id: Option<String>,
    pub sheet_csv_url: Option<String>,
    pub staleness_hours: i64,
    pub substitution_rule: SubstitutionRule,
    /// Snapshot directory; defaults to the platform data dir
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_deployment_id: Some(DEPLOYMENT_ID_PLACEHOLDER.to_string()),
            sheet_csv_url: None,
            staleness_hours: DEFAULT_STALENESS_HOURS,
            substitution_rule: SubstitutionRule::default(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Default config file path: ~/.config/deck_checker/config.json
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deck_checker")
            .join("config.json")
    }

    /// Load the config file, creating it with default values if missing
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config =
                serde_json::from_str(&content).map_err(|e| CheckerError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            log::debug!("Loaded configuration from {}", path.display());
            return Ok(config);
        }

        log::info!("Configuration file not found. Creating a new one with default values.");
        let config = Config::default();
        config.save(path)?;
        log::info!("Default configuration file created at: {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Pick the collection source: a real deployment id wins over a CSV URL
    pub fn source(&self) -> Result<SourceConfig> {
        let usable = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty() && *v != DEPLOYMENT_ID_PLACEHOLDER)
                .map(str::to_string)
        };

        if let Some(deployment_id) = usable(&self.google_deployment_id) {
            return Ok(SourceConfig::GoogleScript { deployment_id });
        }
        if let Some(url) = usable(&self.sheet_csv_url) {
            return Ok(SourceConfig::SheetCsv { url });
        }

        Err(CheckerError::ConfigurationMissing(
            "google_deployment_id (or sheet_csv_url) is missing in the configuration file"
                .to_string(),
        ))
    }

    /// Staleness policy for `staleness_hours`; `path` names the file in errors
    pub fn staleness_policy(&self, path: &Path) -> Result<StalenessPolicy> {
        StalenessPolicy::from_hours(self.staleness_hours).ok_or_else(|| {
            CheckerError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!(
                    "staleness_hours must be between 0 and {}, got {}",
                    MAX_STALENESS_HOURS, self.staleness_hours
                ),
            }
        })
    }

    pub fn snapshot_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::cache::SnapshotStore::default_dir)
    }
}
