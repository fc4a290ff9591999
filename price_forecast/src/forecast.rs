//! Turning a calendar target into a model call
//!
//! The fitted model was trained on the position of each observation in the
//! sorted series, not on calendar time. A target month is therefore mapped to
//! `last_index + months_ahead`, where `months_ahead` is the whole-month
//! distance from the last observation. Targets that are not strictly after
//! the last observation are rejected before the model is called.

use crate::calendar;
use crate::error::{ForecastError, Result};
use crate::models::FittedModel;
use crate::store::SeriesView;
use chrono::NaiveDate;
use serde::Serialize;

/// Month and year to forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastQuery {
    target_month: u32,
    target_year: i32,
}

impl ForecastQuery {
    /// Create a query; the month must be within 1-12
    pub fn new(target_month: u32, target_year: i32) -> Result<Self> {
        if !(1..=12).contains(&target_month) {
            return Err(ForecastError::InvalidMonth(target_month));
        }

        Ok(Self {
            target_month,
            target_year,
        })
    }

    pub fn target_month(&self) -> u32 {
        self.target_month
    }

    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    /// First day of the target month
    pub fn target_date(&self) -> Result<NaiveDate> {
        calendar::first_of_month(self.target_year, self.target_month)
    }
}

/// Position of the last observation of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Zero-based index of the last observation
    pub last_index: i64,
    /// First day of the last observed month
    pub last_timestamp: NaiveDate,
}

impl Anchor {
    /// Anchor of a sorted, non-empty view
    pub fn of(view: &SeriesView<'_>) -> Result<Self> {
        let last = view.last().ok_or_else(|| {
            ForecastError::EmptyView(format!(
                "no {} history to forecast from",
                view.commodity()
            ))
        })?;

        Ok(Self {
            last_index: view.len() as i64 - 1,
            last_timestamp: last.timestamp(),
        })
    }

    /// Whole months from the last observation to the query's target
    pub fn months_until(&self, query: &ForecastQuery) -> Result<i64> {
        Ok(calendar::months_between(
            self.last_timestamp,
            query.target_date()?,
        ))
    }
}

/// A point forecast and how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub commodity: String,
    pub query: ForecastQuery,
    /// Months between the last observation and the target
    pub months_ahead: i64,
    /// Sequential index passed to the model
    pub model_index: i64,
    /// Predicted price, unrounded
    pub value: f64,
}

/// Forecasts one commodity's series with a fitted model.
///
/// Holds no state between calls.
#[derive(Debug)]
pub struct ForecastAdapter<'m, M: FittedModel + ?Sized> {
    model: &'m M,
}

impl<'m, M: FittedModel + ?Sized> ForecastAdapter<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    /// Forecast the price at the query's target month.
    ///
    /// `view` must hold one commodity sorted oldest first, as produced by
    /// [`SeriesStore`](crate::store::SeriesStore).
    pub fn forecast(&self, view: &SeriesView<'_>, query: &ForecastQuery) -> Result<Forecast> {
        let anchor = Anchor::of(view)?;
        let months_ahead = anchor.months_until(query)?;

        if months_ahead <= 0 {
            tracing::debug!(
                commodity = view.commodity(),
                months_ahead,
                "target period is not after the last observation"
            );
            return Err(ForecastError::NonFuturePeriod { months_ahead });
        }

        let model_index = anchor.last_index + months_ahead;
        tracing::debug!(
            commodity = view.commodity(),
            last_index = anchor.last_index,
            months_ahead,
            model_index,
            model = self.model.name(),
            "calling model"
        );
        let value = self.model.predict(model_index)?;

        Ok(Forecast {
            commodity: view.commodity().to_string(),
            query: *query,
            months_ahead,
            model_index,
            value,
        })
    }
}
