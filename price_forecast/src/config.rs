//! Dashboard configuration loaded from TOML

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the configuration file
pub const DEFAULT_CONFIG_FILE: &str = "pangan.toml";

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for loading data and offering forecasts.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Cleaned price dataset (CSV)
    pub data_path: PathBuf,
    /// Fitted model artifact (JSON)
    pub model_path: PathBuf,
    /// The only commodity the model was fitted for
    pub forecast_commodity: String,
    /// How many years past the last observed year a forecast may target
    pub horizon_years: i32,
    /// Treat an unknown month label as fatal instead of dropping the row
    pub strict_months: bool,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data_pangan_bersih.csv"),
            model_path: PathBuf::from("model_harga_beras.json"),
            forecast_commodity: "Beras Premium".to_string(),
            horizon_years: 2,
            strict_months: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load a configuration file if it exists, otherwise use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check values that deserialization alone cannot
    pub fn validate(&self) -> Result<()> {
        if self.forecast_commodity.trim().is_empty() {
            return Err(ForecastError::DataError(
                "forecast_commodity must not be empty".to_string(),
            ));
        }
        if self.horizon_years < 0 {
            return Err(ForecastError::DataError(format!(
                "horizon_years must not be negative, got {}",
                self.horizon_years
            )));
        }
        Ok(())
    }
}
