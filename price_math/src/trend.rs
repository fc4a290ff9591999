//! Linear trend over a sequential index
//!
//! A fitted trend maps the zero-based position of an observation in its
//! chronologically sorted series to a price: `intercept + slope * index`.
//! Coefficients are produced elsewhere; this module only evaluates them.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Fitted linear trend with a single positional feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    intercept: f64,
    slope: f64,
}

impl LinearTrend {
    /// Create a trend from already fitted coefficients
    pub fn new(intercept: f64, slope: f64) -> Result<Self> {
        if !intercept.is_finite() || !slope.is_finite() {
            return Err(MathError::InvalidInput(
                "Trend coefficients must be finite".to_string(),
            ));
        }

        Ok(Self { intercept, slope })
    }

    /// Evaluate the trend at a sequential index
    pub fn value_at(&self, index: i64) -> Result<f64> {
        let value = self.intercept + self.slope * index as f64;

        if !value.is_finite() {
            return Err(MathError::CalculationError(format!(
                "Trend value at index {} is not finite",
                index
            )));
        }

        Ok(value)
    }

    /// Get the intercept (value at index 0)
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the slope (change per index step)
    pub fn slope(&self) -> f64 {
        self.slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 100.0)]
    #[case(1, 110.0)]
    #[case(3, 130.0)]
    #[case(-1, 90.0)]
    fn test_value_at(#[case] index: i64, #[case] expected: f64) {
        let trend = LinearTrend::new(100.0, 10.0).unwrap();
        assert_eq!(trend.value_at(index).unwrap(), expected);
    }

    #[test]
    fn test_non_finite_coefficients_are_rejected() {
        assert!(LinearTrend::new(f64::NAN, 1.0).is_err());
        assert!(LinearTrend::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_value_is_an_error() {
        let trend = LinearTrend::new(0.0, f64::MAX).unwrap();
        assert!(matches!(
            trend.value_at(i64::MAX),
            Err(MathError::CalculationError(_))
        ));
    }
}
