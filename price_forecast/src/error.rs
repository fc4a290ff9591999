//! Error types for the price_forecast crate

use price_math::MathError;
use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Month label outside the canonical twelve-name table
    #[error("Invalid month label: {0:?}")]
    InvalidMonthLabel(String),

    /// Month number outside 1..=12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year/month pair that cannot be represented as a calendar date
    #[error("Invalid date: {year}-{month:02}")]
    InvalidDate { year: i32, month: u32 },

    /// Summary or forecast requested on a series with no observations
    #[error("Empty series: {0}")]
    EmptyView(String),

    /// Forecast target is not strictly after the last observation
    #[error("Forecast period must be after the last observation ({months_ahead} months ahead)")]
    NonFuturePeriod { months_ahead: i64 },

    /// The fitted model failed to produce a prediction
    #[error("Model error: {0}")]
    Model(String),

    /// Commodity not present in the dataset at all
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),

    /// Forecasting is not offered for the requested commodity
    #[error("Forecast is only available for {0}")]
    ForecastUnavailable(String),

    /// Forecast year outside the offered horizon
    #[error("Forecast year {year} is outside the allowed range {min}-{max}")]
    OutsideHorizon { year: i32, min: i32, max: i32 },

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from reading CSV input
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Malformed model artifact
    #[error("Model format error: {0}")]
    ModelFormat(#[from] serde_json::Error),

    /// Malformed configuration file
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

impl ForecastError {
    /// Whether the error is an input problem the user can correct by
    /// choosing a different commodity or period.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            ForecastError::NonFuturePeriod { .. }
                | ForecastError::ForecastUnavailable(_)
                | ForecastError::UnknownCommodity(_)
                | ForecastError::OutsideHorizon { .. }
                | ForecastError::InvalidMonth(_)
        )
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData(msg) => ForecastError::EmptyView(msg),
            other => ForecastError::DataError(other.to_string()),
        }
    }
}
