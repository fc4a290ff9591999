//! # Price Math
//!
//! Numeric building blocks for commodity price series.
//! This crate provides the summary statistics shown next to a price history
//! and the linear trend evaluation behind the price forecast.

use thiserror::Error;

pub mod stats;
pub mod trend;

pub use stats::{summarize, Summary};
pub use trend::LinearTrend;

/// Errors that can occur in price calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for price math operations
pub type Result<T> = std::result::Result<T, MathError>;
