//! Application policy around the store and the forecast adapter
//!
//! The model behind the forecast was fitted for a single commodity, and the
//! forecast year is limited to a short horizon past the latest data. Both
//! rules live here so the adapter stays generic.

use crate::config::DashboardConfig;
use crate::data::DataLoader;
use crate::error::{ForecastError, Result};
use crate::forecast::{Forecast, ForecastAdapter, ForecastQuery};
use crate::models::{FittedModel, LinearTrendModel};
use crate::store::{SeriesStore, SeriesView};
use price_math::Summary;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Filtered history with its summary, when there is one
#[derive(Debug, Clone)]
pub struct History<'a> {
    pub view: SeriesView<'a>,
    /// `None` when the selection has no records
    pub summary: Option<Summary>,
}

/// Price history and forecast service
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: SeriesStore,
    model: Arc<dyn FittedModel>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(store: SeriesStore, model: Arc<dyn FittedModel>, config: DashboardConfig) -> Self {
        Self {
            store,
            model,
            config,
        }
    }

    /// Load the dataset and the model named in the configuration
    pub fn load(config: DashboardConfig) -> Result<Self> {
        config.validate()?;

        let loaded = DataLoader::new(config.strict_months).load_csv(&config.data_path)?;
        if !loaded.rejected.is_empty() {
            tracing::warn!(
                rejected = loaded.rejected.len(),
                "some rows had unknown month labels and were dropped"
            );
        }
        let store = SeriesStore::new(loaded.records);
        let model = LinearTrendModel::from_json_file(&config.model_path)?;

        Ok(Self::new(store, Arc::new(model), config))
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Commodities available for selection
    pub fn commodities(&self) -> BTreeSet<String> {
        self.store.distinct_commodities()
    }

    /// Years available for selection
    pub fn years(&self) -> BTreeSet<i32> {
        self.store.distinct_years()
    }

    /// History of a commodity in the selected years.
    ///
    /// The selection is applied as given: no years selects no records.
    pub fn history(&self, commodity: &str, years: &BTreeSet<i32>) -> Result<History<'_>> {
        if !self.store.contains_commodity(commodity) {
            return Err(ForecastError::UnknownCommodity(commodity.to_string()));
        }

        let view = self.store.filter(commodity, years);
        let summary = if view.is_empty() {
            None
        } else {
            Some(view.summary()?)
        };

        Ok(History { view, summary })
    }

    /// The commodity forecasts are offered for
    pub fn forecast_commodity(&self) -> &str {
        self.config.forecast_commodity.trim()
    }

    /// Whether forecasts are offered for a commodity (case-insensitive)
    pub fn is_forecastable(&self, commodity: &str) -> bool {
        commodity.trim().to_lowercase() == self.forecast_commodity().to_lowercase()
    }

    /// Years a forecast may target: the latest year in the data up to the
    /// configured horizon past it
    pub fn forecast_horizon(&self) -> Option<RangeInclusive<i32>> {
        self.store
            .max_year()
            .map(|max| max..=max.saturating_add(self.config.horizon_years))
    }

    /// Forecast the price of `commodity` for a target month.
    pub fn forecast(&self, commodity: &str, month: u32, year: i32) -> Result<Forecast> {
        if !self.is_forecastable(commodity) {
            return Err(ForecastError::ForecastUnavailable(
                self.forecast_commodity().to_string(),
            ));
        }

        let horizon = self.forecast_horizon().ok_or_else(|| {
            ForecastError::EmptyView("no price data loaded".to_string())
        })?;
        if !horizon.contains(&year) {
            return Err(ForecastError::OutsideHorizon {
                year,
                min: *horizon.start(),
                max: *horizon.end(),
            });
        }

        let query = ForecastQuery::new(month, year)?;
        let name = self
            .store
            .resolve_commodity(self.forecast_commodity())
            .ok_or_else(|| {
                ForecastError::EmptyView(format!(
                    "no {} history to forecast from",
                    self.forecast_commodity()
                ))
            })?;
        let series = self.store.series(&name);

        let forecast = ForecastAdapter::new(self.model.as_ref()).forecast(&series, &query)?;
        tracing::info!(
            commodity = %forecast.commodity,
            month,
            year,
            value = forecast.value,
            "forecast computed"
        );
        Ok(forecast)
    }
}
