//! # Price Forecast
//!
//! Historical commodity price queries and a single-commodity price forecast.
//!
//! ## Features
//!
//! - Month-label normalization (Indonesian month names to first-of-month dates)
//! - Immutable in-memory store with commodity/year filtering and summaries
//! - Forecasting with a pre-fitted linear trend over the sequential index
//! - TOML configuration and a small command-line front end (`pangan`)
//!
//! ## Sequential index
//!
//! The fitted model treats a commodity's sorted history as equally spaced
//! points `0, 1, 2, ...`. A forecast for a calendar month is made at
//! `last_index + months_ahead`, and only for months strictly after the last
//! observation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use price_forecast::forecast::{ForecastAdapter, ForecastQuery};
//! use price_forecast::models::LinearTrendModel;
//! use price_forecast::{DataLoader, SeriesStore};
//!
//! // Load data
//! let loaded = DataLoader::from_csv("data_pangan_bersih.csv")?;
//! let store = SeriesStore::new(loaded.records);
//!
//! // Load the fitted model
//! let model = LinearTrendModel::from_json_file("model_harga_beras.json")?;
//!
//! // Summarize a selection
//! let years = store.distinct_years();
//! let view = store.filter("Beras Premium", &years);
//! if !view.is_empty() {
//!     let summary = store.summary(&view)?;
//!     println!("mean {}", summary.mean);
//! }
//!
//! // Forecast April 2025
//! let series = store.series("Beras Premium");
//! let query = ForecastQuery::new(4, 2025)?;
//! let forecast = ForecastAdapter::new(&model).forecast(&series, &query)?;
//! println!("forecast {}", forecast.value);
//! # Ok::<(), price_forecast::ForecastError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod forecast;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use crate::config::DashboardConfig;
pub use crate::dashboard::{Dashboard, History};
pub use crate::data::{DataLoader, PriceRecord};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{Forecast, ForecastAdapter, ForecastQuery};
pub use crate::models::{FittedModel, LinearTrendModel};
pub use crate::store::{SeriesStore, SeriesView};
pub use price_math::Summary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
