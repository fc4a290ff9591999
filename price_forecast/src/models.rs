//! Fitted forecasting models
//!
//! Models are trained elsewhere and shipped as artifacts. The forecast code
//! only needs one capability from them: a prediction for a sequential index.

use crate::error::{ForecastError, Result};
use price_math::LinearTrend;
use serde::Deserialize;
use std::fmt::Debug;
use std::fs;
use std::path::Path;

/// A model already fitted against the sequential index of a price series
pub trait FittedModel: Debug + Send + Sync {
    /// Predict the price at a zero-based sequential index
    fn predict(&self, sequential_index: i64) -> Result<f64>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// On-disk form of a linear trend model
#[derive(Debug, Clone, Deserialize)]
struct LinearTrendArtifact {
    #[serde(default = "default_model_name")]
    name: String,
    intercept: f64,
    slope: f64,
}

fn default_model_name() -> String {
    "Linear Trend".to_string()
}

/// Linear regression of price on sequential index
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTrendModel {
    name: String,
    trend: LinearTrend,
}

impl LinearTrendModel {
    /// Create a model from fitted coefficients
    pub fn new(name: impl Into<String>, intercept: f64, slope: f64) -> Result<Self> {
        let trend = LinearTrend::new(intercept, slope)
            .map_err(|e| ForecastError::Model(e.to_string()))?;

        Ok(Self {
            name: name.into(),
            trend,
        })
    }

    /// Parse a model artifact from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let artifact: LinearTrendArtifact = serde_json::from_str(json)?;
        Self::new(artifact.name, artifact.intercept, artifact.slope)
    }

    /// Load a model artifact from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let model = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            intercept = model.trend.intercept(),
            slope = model.trend.slope(),
            "loaded {}",
            model.name
        );
        Ok(model)
    }
}

impl FittedModel for LinearTrendModel {
    fn predict(&self, sequential_index: i64) -> Result<f64> {
        self.trend
            .value_at(sequential_index)
            .map_err(|e| ForecastError::Model(e.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
