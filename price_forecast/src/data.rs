//! Price records and CSV loading

use crate::calendar;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column headers of the cleaned price dataset
pub const REQUIRED_COLUMNS: [&str; 4] = ["Komoditas", "Tahun", "Bulan", "Harga"];

/// One row of the dataset as it appears in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Komoditas")]
    pub commodity: String,
    #[serde(rename = "Tahun")]
    pub year: i32,
    #[serde(rename = "Bulan")]
    pub month_label: String,
    #[serde(rename = "Harga")]
    pub price: f64,
}

/// A normalized price observation.
///
/// The month and year are read back from the first-of-month date, so they
/// can never disagree with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    commodity: String,
    month_label: &'static str,
    timestamp: NaiveDate,
    price: f64,
}

impl PriceRecord {
    /// Create a record, trimming the commodity and resolving the month label
    pub fn new(commodity: &str, year: i32, month_label: &str, price: f64) -> Result<Self> {
        let timestamp = calendar::normalize(year, month_label)?;
        let month_label = calendar::month_label(timestamp.month())
            .ok_or(ForecastError::InvalidMonth(timestamp.month()))?;

        Ok(Self {
            commodity: commodity.trim().to_string(),
            month_label,
            timestamp,
            price,
        })
    }

    /// Commodity name, trimmed
    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Canonical month label
    pub fn month_label(&self) -> &'static str {
        self.month_label
    }

    /// First day of the observed month
    pub fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }

    /// Observed price
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl TryFrom<RawRow> for PriceRecord {
    type Error = ForecastError;

    fn try_from(row: RawRow) -> Result<Self> {
        PriceRecord::new(&row.commodity, row.year, &row.month_label, row.price)
    }
}

/// A row that could not be normalized
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line in the source, counting the header as line 1
    pub line: usize,
    /// The row as read
    pub row: RawRow,
    /// Why it was rejected
    pub reason: String,
}

/// Normalized records plus the rows that were dropped on the way
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub records: Vec<PriceRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// Loader for the cleaned price dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct DataLoader {
    /// Fail on the first unknown month label instead of dropping the row
    strict_months: bool,
}

impl DataLoader {
    /// Create a loader
    pub fn new(strict_months: bool) -> Self {
        Self { strict_months }
    }

    /// Load a CSV file with the default (lenient) loader
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<LoadedData> {
        Self::default().load_csv(path)
    }

    /// Load a CSV file
    pub fn load_csv<P: AsRef<Path>>(&self, path: P) -> Result<LoadedData> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "loading price dataset");
        self.load_reader(file)
    }

    /// Load CSV data from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LoadedData> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(ForecastError::DataError(format!(
                    "Missing column '{}' in price dataset",
                    column
                )));
            }
        }

        let rows = reader
            .deserialize::<RawRow>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.normalize_rows(rows)
    }

    /// Normalize already parsed rows.
    ///
    /// Line numbers in the report assume the rows came from a file with a
    /// single header line.
    pub fn normalize_rows<I>(&self, rows: I) -> Result<LoadedData>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut loaded = LoadedData::default();

        for (pos, row) in rows.into_iter().enumerate() {
            let line = pos + 2;
            match PriceRecord::try_from(row.clone()) {
                Ok(record) => loaded.records.push(record),
                Err(err @ ForecastError::InvalidMonthLabel(_)) if !self.strict_months => {
                    tracing::warn!(line, commodity = %row.commodity.trim(), "dropping row: {}", err);
                    loaded.rejected.push(RejectedRow {
                        line,
                        row,
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    tracing::error!(line, commodity = %row.commodity.trim(), "rejecting dataset: {}", err);
                    return Err(err);
                }
            }
        }

        tracing::info!(
            records = loaded.records.len(),
            rejected = loaded.rejected.len(),
            "price dataset normalized"
        );

        Ok(loaded)
    }
}
