//! Core rendering abstractions for report generation.
//!
//! This crate provides the pieces every output backend shares:
//! - `ReportRenderer` trait turning a `TabularReport` into bytes
//! - `ReportFormat`, the closed set of output encodings, with MIME metadata
//! - `RenderContext` carrying the generation timestamp
//! - Error types for rendering operations
//! - Shared helpers for deriving field names from headers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::ReportRenderer;
pub use types::{ParseFormatError, RenderContext, ReportFormat};
