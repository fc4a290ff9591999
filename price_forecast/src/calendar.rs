//! Month labels and first-of-month dates
//!
//! The dataset records the month of each observation as an Indonesian month
//! name. Ordering and forecast offsets depend on turning that label into a
//! real date, so an unknown label is an error rather than a default.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};

/// Canonical month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Look up the month number (1-12) of a label.
///
/// Surrounding whitespace is ignored; the comparison is case-sensitive.
pub fn month_index(label: &str) -> Result<u32> {
    let trimmed = label.trim();
    MONTH_LABELS
        .iter()
        .position(|candidate| *candidate == trimmed)
        .map(|pos| pos as u32 + 1)
        .ok_or_else(|| ForecastError::InvalidMonthLabel(label.to_string()))
}

/// Label of a month number, if it is within 1-12.
pub fn month_label(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_LABELS[month as usize - 1]),
        _ => None,
    }
}

/// First day of the month named by `month_label` in `year`.
pub fn normalize(year: i32, month_label: &str) -> Result<NaiveDate> {
    let month = month_index(month_label)?;
    first_of_month(year, month)
}

/// First day of a numeric month.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(ForecastError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ForecastError::InvalidDate { year, month })
}

/// Whole months from `from` to `to`, ignoring the day of month.
///
/// Negative when `to` is earlier than `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (i64::from(to.year()) - i64::from(from.year())) * 12
        + (i64::from(to.month()) - i64::from(from.month()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_every_label_round_trips_through_its_index() {
        for (pos, label) in MONTH_LABELS.iter().enumerate() {
            let month = month_index(label).unwrap();
            assert_eq!(month, pos as u32 + 1);
            assert_eq!(month_label(month), Some(*label));
        }
    }

    #[test]
    fn test_normalize_gives_first_of_month() {
        let date = normalize(2024, "Maret").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let date = normalize(2023, "  Desember ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("Januray")]
    #[case("januari")]
    #[case("MEI")]
    #[case("January")]
    #[case("3")]
    #[case("03")]
    fn test_unknown_labels_are_rejected(#[case] label: &str) {
        let result = normalize(2024, label);
        assert!(matches!(result, Err(ForecastError::InvalidMonthLabel(_))));
    }

    #[test]
    fn test_normalize_preserves_calendar_order() {
        let mut previous: Option<NaiveDate> = None;
        for year in 2019..=2025 {
            for label in MONTH_LABELS {
                let date = normalize(year, label).unwrap();
                if let Some(prev) = previous {
                    assert!(prev < date, "{} should be before {}", prev, date);
                }
                previous = Some(date);
            }
        }
    }

    #[test]
    fn test_normalize_is_deterministic() {
        assert_eq!(normalize(2022, "Juli").unwrap(), normalize(2022, "Juli").unwrap());
    }

    #[test]
    fn test_month_label_out_of_range() {
        assert_eq!(month_label(0), None);
        assert_eq!(month_label(13), None);
    }

    #[test]
    fn test_unrepresentable_year() {
        let result = first_of_month(i32::MAX, 1);
        assert!(matches!(result, Err(ForecastError::InvalidDate { .. })));
    }

    #[rstest]
    #[case((2024, 12), (2024, 1), -11)]
    #[case((2024, 12), (2025, 1), 1)]
    #[case((2024, 3), (2024, 4), 1)]
    #[case((2024, 3), (2024, 3), 0)]
    #[case((2023, 6), (2025, 6), 24)]
    fn test_months_between(
        #[case] from: (i32, u32),
        #[case] to: (i32, u32),
        #[case] expected: i64,
    ) {
        let from = first_of_month(from.0, from.1).unwrap();
        let to = first_of_month(to.0, to.1).unwrap();
        assert_eq!(months_between(from, to), expected);
    }
}
