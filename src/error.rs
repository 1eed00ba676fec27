// src/error.rs
use quire_render_core::{ParseFormatError, RenderError};
use quire_types::{ParseKindError, ReportKind, ReportShapeError};
use thiserror::Error;

/// Errors surfaced by the report engine.
///
/// Request problems (`MissingParameter`, `NotFound`, `UnsupportedFormat`,
/// `UnknownKind`) are always detected before anything is rendered.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Missing required parameter '{parameter}' for {kind} report")]
    MissingParameter {
        kind: ReportKind,
        parameter: &'static str,
    },

    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown report kind: {0}")]
    UnknownKind(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Report shape is invalid: {0}")]
    Shape(#[from] ReportShapeError),

    #[error("Catalog could not be loaded: {0}")]
    Catalog(String),

    #[error("Engine is misconfigured: {0}")]
    Config(String),
}

impl ReportError {
    /// Whether the error was caused by the request rather than by the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReportError::MissingParameter { .. }
                | ReportError::NotFound { .. }
                | ReportError::UnsupportedFormat(_)
                | ReportError::UnknownKind(_)
        )
    }
}

impl From<ParseFormatError> for ReportError {
    fn from(e: ParseFormatError) -> Self {
        ReportError::UnsupportedFormat(e.0)
    }
}

impl From<ParseKindError> for ReportError {
    fn from(e: ParseKindError) -> Self {
        ReportError::UnknownKind(e.0)
    }
}
