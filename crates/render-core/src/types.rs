use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An output encoding a report can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    Csv,
    Json,
    Xml,
    Pdf,
}

impl ReportFormat {
    /// All formats in declaration order.
    pub const ALL: [ReportFormat; 4] = [
        ReportFormat::Csv,
        ReportFormat::Json,
        ReportFormat::Xml,
        ReportFormat::Pdf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Json => "JSON",
            ReportFormat::Xml => "XML",
            ReportFormat::Pdf => "PDF",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::Json => "application/json",
            ReportFormat::Xml => "application/xml",
            ReportFormat::Pdf => "application/pdf",
        }
    }

    /// File extension including the leading dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => ".csv",
            ReportFormat::Json => ".json",
            ReportFormat::Xml => ".xml",
            ReportFormat::Pdf => ".pdf",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported report format: {0}")]
pub struct ParseFormatError(pub String);

impl FromStr for ReportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_ascii_uppercase();
        ReportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

/// Per-render information that is not part of the report itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Wall-clock time the render started. Never persisted.
    pub generated_at: NaiveDateTime,
}

impl RenderContext {
    /// Captures the current local time.
    pub fn now() -> Self {
        Self { generated_at: Local::now().naive_local() }
    }

    pub fn at(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    /// ISO-8601 timestamp without fractional seconds, e.g. `2024-03-01T09:15:00`.
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::now()
    }
}
