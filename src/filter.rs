//! Narrowing of a source collection before it is projected.
//!
//! Filters always run in the same order: the creation-date window first, then
//! the result limit. Inputs are never modified.

use crate::error::ReportError;
use chrono::{NaiveDate, NaiveDateTime};
use quire_types::{Author, Book, ReportKind, Store, User};
use serde::{Deserialize, Serialize};

/// Per-request filtering options. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Inclusive lower bound on the creation date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the creation date.
    pub end_date: Option<NaiveDate>,
    /// Maximum number of records to keep. Zero means no limit.
    pub limit: Option<usize>,
    /// Author whose books a `BOOKS_BY_AUTHOR` report lists.
    pub author_id: Option<i64>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with_start_date(start).with_end_date(end)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    fn has_date_window(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    /// Whether a record created at `created_at` falls inside the date window.
    /// Undated records are always kept.
    pub fn admits(&self, created_at: Option<NaiveDateTime>) -> bool {
        let Some(created_at) = created_at else {
            return true;
        };
        let date = created_at.date();
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

/// Records that carry a creation timestamp.
pub trait Dated {
    fn created_at(&self) -> Option<NaiveDateTime>;
}

impl Dated for Book {
    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

impl Dated for Author {
    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

impl Dated for User {
    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

impl Dated for Store {
    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

/// Checks that `params` carries everything `kind` needs.
pub fn validate(kind: ReportKind, params: &FilterParams) -> Result<(), ReportError> {
    if kind == ReportKind::BooksByAuthor && params.author_id.is_none() {
        return Err(ReportError::MissingParameter {
            kind,
            parameter: "author_id",
        });
    }
    Ok(())
}

/// Applies the date window and then the limit, returning a new collection.
pub fn apply<T: Dated + Clone>(records: &[T], params: &FilterParams) -> Vec<T> {
    if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
        if start > end {
            log::warn!(
                "Date range is inverted ({} > {}); only undated records will match",
                start,
                end
            );
        }
    }

    let mut kept: Vec<T> = if params.has_date_window() {
        records
            .iter()
            .filter(|record| params.admits(record.created_at()))
            .cloned()
            .collect()
    } else {
        records.to_vec()
    };
    let after_dates = kept.len();

    limit_in_place(&mut kept, params.limit);

    log::debug!(
        "Filtered {} records: {} after date window, {} after limit",
        records.len(),
        after_dates,
        kept.len()
    );
    kept
}

/// Keeps only the limit, ignoring any date window.
pub fn apply_limit<T: Clone>(records: &[T], limit: Option<usize>) -> Vec<T> {
    let mut kept = records.to_vec();
    limit_in_place(&mut kept, limit);
    kept
}

fn limit_in_place<T>(records: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit.filter(|&limit| limit > 0) {
        records.truncate(limit);
    }
}
