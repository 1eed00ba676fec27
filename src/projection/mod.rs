//! Projection of typed records into [`TabularReport`]s.
//!
//! Each report kind has one [`Projection`] constant holding its title, its
//! column headers and a row-mapping function. The cell formatting rules live in
//! this module so every projection renders missing values, prices and dates the
//! same way.

mod authors;
mod books;
mod stores;
mod users;

pub use authors::AUTHORS;
pub use books::{BOOKS, BOOKS_BY_AUTHOR, books_by_author};
pub use stores::STORES;
pub use users::USERS;

use chrono::NaiveDateTime;
use quire_types::{ReportKind, ReportShapeError, TabularReport};
use rust_decimal::Decimal;

/// Placeholder for a missing optional value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Longest free-text cell, in characters, before it is cut and suffixed with `...`.
pub const MAX_TEXT_CHARS: usize = 50;

/// Turns records of type `T` into rows of one report kind.
pub struct Projection<T> {
    pub kind: ReportKind,
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub row: fn(&T) -> Vec<String>,
}

impl<T> Projection<T> {
    pub fn headers(&self) -> Vec<String> {
        self.headers.iter().map(|h| h.to_string()).collect()
    }

    /// Projects `records` in order under the projection's fixed title.
    pub fn build(&self, records: &[T]) -> Result<TabularReport, ReportShapeError> {
        self.build_titled(self.title, records)
    }

    pub fn build_titled(
        &self,
        title: impl Into<String>,
        records: &[T],
    ) -> Result<TabularReport, ReportShapeError> {
        let rows = records.iter().map(self.row).collect();
        let report = TabularReport::new(self.kind, title, self.headers(), rows)?;
        log::debug!(
            "Projected {} {} records into {} columns",
            report.record_count(),
            self.kind,
            report.width()
        );
        Ok(report)
    }
}

pub(crate) fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// `$` followed by the amount, padded to at least two decimal places.
/// Extra precision from the source is kept, never rounded away.
pub(crate) fn money(value: Option<Decimal>) -> String {
    match value {
        Some(amount) => {
            let mut amount = amount.normalize();
            if amount.scale() < 2 {
                amount.rescale(2);
            }
            format!("${}", amount)
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

pub(crate) fn date(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Cuts text longer than [`MAX_TEXT_CHARS`] characters and appends `...`.
pub(crate) fn truncate(value: Option<&str>) -> String {
    match value {
        Some(text) if text.chars().count() > MAX_TEXT_CHARS => {
            let cut: String = text.chars().take(MAX_TEXT_CHARS).collect();
            format!("{}...", cut)
        }
        Some(text) => text.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub(crate) fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_money_forces_two_decimals() {
        assert_eq!(money(Some(Decimal::new(1999, 2))), "$19.99");
        assert_eq!(money(Some(Decimal::new(5, 0))), "$5.00");
        assert_eq!(money(Some(Decimal::new(125, 1))), "$12.50");
        assert_eq!(money(None), "N/A");
    }

    #[test]
    fn test_money_keeps_extra_precision() {
        assert_eq!(money(Some(Decimal::new(19999, 3))), "$19.999");
        assert_eq!(money(Some(Decimal::new(19990, 3))), "$19.99");
        assert_eq!(money(Some(Decimal::new(200000, 4))), "$20.00");
    }

    #[test]
    fn test_date_drops_time_of_day() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(date(Some(ts)), "2024-01-15");
        assert_eq!(date(None), "N/A");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let exact = "a".repeat(50);
        assert_eq!(truncate(Some(&exact)), exact);

        let long = "é".repeat(60);
        let cut = truncate(Some(&long));
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"é".repeat(50)));

        assert_eq!(truncate(None), "N/A");
    }

    #[test]
    fn test_or_na_and_yes_no() {
        assert_eq!(or_na(Some("x")), "x");
        assert_eq!(or_na(None), "N/A");
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
