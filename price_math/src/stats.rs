//! Descriptive statistics over price observations

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Mean, maximum and minimum of a set of prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Arithmetic mean
    pub mean: f64,
    /// Highest price
    pub max: f64,
    /// Lowest price
    pub min: f64,
}

/// Summarize a non-empty slice of prices.
///
/// An empty slice has no mean, so it is rejected instead of being reported
/// as zeros.
pub fn summarize(prices: &[f64]) -> Result<Summary> {
    if prices.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot summarize an empty price series".to_string(),
        ));
    }

    let summary = Summary {
        mean: Statistics::mean(prices),
        max: Statistics::max(prices),
        min: Statistics::min(prices),
    };

    if summary.mean.is_nan() || summary.max.is_nan() || summary.min.is_nan() {
        return Err(MathError::CalculationError(
            "Price series contains NaN values".to_string(),
        ));
    }

    Ok(summary)
}
