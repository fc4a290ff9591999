//! # Pangan
//!
//! `pangan_workspace` bundles the national food price crates:
//!
//! - [`price_math`]: summary statistics and linear trend evaluation
//! - [`price_forecast`]: month normalization, the price store, and the
//!   single-commodity forecast
//!
//! ## Example
//!
//! ```
//! use pangan_workspace::prelude::*;
//!
//! let records = vec![
//!     PriceRecord::new("X", 2024, "Januari", 100.0)?,
//!     PriceRecord::new("X", 2024, "Februari", 110.0)?,
//!     PriceRecord::new("X", 2024, "Maret", 120.0)?,
//! ];
//! let store = SeriesStore::new(records);
//! let series = store.series("X");
//!
//! let model = LinearTrendModel::new("X trend", 100.0, 10.0)?;
//! let forecast = ForecastAdapter::new(&model).forecast(&series, &ForecastQuery::new(4, 2024)?)?;
//! assert_eq!(forecast.model_index, 3);
//! assert_eq!(forecast.value, 130.0);
//! # Ok::<(), ForecastError>(())
//! ```

pub use price_forecast;
pub use price_math;

/// Commonly used types from every crate in the workspace
pub mod prelude {
    pub use price_forecast::{
        Dashboard, DashboardConfig, DataLoader, FittedModel, Forecast, ForecastAdapter,
        ForecastError, ForecastQuery, History, LinearTrendModel, PriceRecord, SeriesStore,
        SeriesView,
    };
    pub use price_math::{LinearTrend, Summary};
}
