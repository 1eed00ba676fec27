//! The format-agnostic tabular report model.
//!
//! Every projection produces a [`TabularReport`] and every renderer consumes one.
//! Renderers never see the record types a report was built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The semantic category of exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportKind {
    Books,
    Authors,
    Users,
    Stores,
    BooksByAuthor,
}

impl ReportKind {
    /// All kinds in declaration order.
    pub const ALL: [ReportKind; 5] = [
        ReportKind::Books,
        ReportKind::Authors,
        ReportKind::Users,
        ReportKind::Stores,
        ReportKind::BooksByAuthor,
    ];

    /// The canonical upper-case identifier, e.g. `BOOKS_BY_AUTHOR`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Books => "BOOKS",
            ReportKind::Authors => "AUTHORS",
            ReportKind::Users => "USERS",
            ReportKind::Stores => "STORES",
            ReportKind::BooksByAuthor => "BOOKS_BY_AUTHOR",
        }
    }

    /// Lower-case identifier used for file names and XML root elements.
    pub fn slug(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    /// Singular element name for one record of this kind: lower-cased,
    /// underscores removed and a single trailing `s` dropped.
    pub fn item_name(&self) -> String {
        let mut name = self.slug().replace('_', "");
        if name.ends_with('s') {
            name.pop();
        }
        name
    }

    /// Whether this kind exposes data only privileged callers may see.
    pub fn is_restricted(&self) -> bool {
        matches!(self, ReportKind::Users)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown report kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ReportKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Raised when a row does not have exactly one cell per header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Row {row} of the {kind} report has {actual} cells, expected {expected}")]
pub struct ReportShapeError {
    pub kind: ReportKind,
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

/// An immutable table of display strings: a title, ordered headers and rows
/// whose width always equals the header count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularReport {
    kind: ReportKind,
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularReport {
    /// Builds a report, rejecting any row whose width differs from the header count.
    pub fn new(
        kind: ReportKind,
        title: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<Self, ReportShapeError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != headers.len())
        {
            return Err(ReportShapeError {
                kind,
                row,
                expected: headers.len(),
                actual: cells.len(),
            });
        }

        Ok(Self {
            kind,
            title: title.into(),
            headers,
            rows,
        })
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
