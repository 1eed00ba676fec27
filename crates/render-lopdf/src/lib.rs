//! Paginated PDF table renderer using lopdf.
//!
//! This crate lays a `TabularReport` out as a titled table on standard pages,
//! repeating the header row after every page break and closing with a footer
//! line carrying the record count and generation time.

mod encoding;
mod layout;
mod metrics;
mod renderer;

pub use layout::{PageSize, PdfTableConfig};
pub use renderer::PdfTableRenderer;
