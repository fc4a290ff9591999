//! In-memory price store and filtered series views

use crate::data::PriceRecord;
use crate::error::{ForecastError, Result};
use price_math::Summary;
use std::collections::BTreeSet;

/// Immutable set of normalized price records.
///
/// Built once at startup; every query borrows from it.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    records: Vec<PriceRecord>,
}

impl SeriesStore {
    /// Create a store from normalized records, keeping their input order
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    /// All records in input order
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Commodities present in the data, ascending
    pub fn distinct_commodities(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|record| record.commodity().to_string())
            .collect()
    }

    /// Years present in the data, ascending
    pub fn distinct_years(&self) -> BTreeSet<i32> {
        self.records.iter().map(PriceRecord::year).collect()
    }

    /// Whether any record carries exactly this commodity name
    pub fn contains_commodity(&self, commodity: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.commodity() == commodity)
    }

    /// Find the stored spelling of a commodity, ignoring case and padding.
    ///
    /// When several spellings match, the alphabetically first one wins and
    /// records under the other case variants are left out of its series.
    pub fn resolve_commodity(&self, name: &str) -> Option<String> {
        let wanted = name.trim().to_lowercase();
        self.distinct_commodities()
            .into_iter()
            .find(|commodity| commodity.to_lowercase() == wanted)
    }

    /// Latest year in the data
    pub fn max_year(&self) -> Option<i32> {
        self.records.iter().map(PriceRecord::year).max()
    }

    /// Records of one commodity within a set of years, oldest first.
    ///
    /// No match gives an empty view; use [`contains_commodity`] to tell an
    /// unknown commodity apart from a year selection with no data.
    ///
    /// [`contains_commodity`]: SeriesStore::contains_commodity
    pub fn filter(&self, commodity: &str, years: &BTreeSet<i32>) -> SeriesView<'_> {
        SeriesView::collect(
            commodity,
            self.records
                .iter()
                .filter(|record| record.commodity() == commodity && years.contains(&record.year())),
        )
    }

    /// Full history of one commodity, oldest first
    pub fn series(&self, commodity: &str) -> SeriesView<'_> {
        SeriesView::collect(
            commodity,
            self.records
                .iter()
                .filter(|record| record.commodity() == commodity),
        )
    }

    /// Mean, maximum and minimum price of a view
    pub fn summary(&self, view: &SeriesView<'_>) -> Result<Summary> {
        view.summary()
    }
}

/// Read-only, chronologically sorted slice of one commodity's records
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesView<'a> {
    commodity: String,
    records: Vec<&'a PriceRecord>,
}

impl<'a> SeriesView<'a> {
    fn collect<I>(commodity: &str, records: I) -> Self
    where
        I: Iterator<Item = &'a PriceRecord>,
    {
        let mut records: Vec<&'a PriceRecord> = records.collect();
        // stable: equal timestamps keep input order
        records.sort_by_key(|record| record.timestamp());

        Self {
            commodity: commodity.to_string(),
            records,
        }
    }

    /// Commodity this view was filtered on
    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    /// Records, oldest first
    pub fn records(&self) -> &[&'a PriceRecord] {
        &self.records
    }

    /// Iterate over the records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &'a PriceRecord> + '_ {
        self.records.iter().copied()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the view has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&'a PriceRecord> {
        self.records.last().copied()
    }

    /// Prices in chronological order
    pub fn prices(&self) -> Vec<f64> {
        self.iter().map(PriceRecord::price).collect()
    }

    /// Apply a commodity/year filter to this view
    pub fn refilter(&self, commodity: &str, years: &BTreeSet<i32>) -> SeriesView<'a> {
        SeriesView::collect(
            commodity,
            self.iter()
                .filter(|record| record.commodity() == commodity && years.contains(&record.year())),
        )
    }

    /// Mean, maximum and minimum price.
    ///
    /// Fails with [`ForecastError::EmptyView`] when there are no records.
    pub fn summary(&self) -> Result<Summary> {
        if self.is_empty() {
            return Err(ForecastError::EmptyView(format!(
                "no {} prices to summarize",
                self.commodity
            )));
        }

        Ok(price_math::summarize(&self.prices())?)
    }
}
