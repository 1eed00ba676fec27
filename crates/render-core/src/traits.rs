use crate::error::RenderError;
use crate::types::{RenderContext, ReportFormat};
use quire_types::TabularReport;

/// A trait for report renderers, one implementation per output format.
///
/// Implementations are pure: they read the report, build the whole document in
/// memory and hand back the bytes only once encoding has fully succeeded.
pub trait ReportRenderer: Send + Sync {
    /// The format this renderer produces. Registries key renderers by it.
    fn format(&self) -> ReportFormat;

    /// Serializes the report.
    fn render(&self, report: &TabularReport, context: &RenderContext)
    -> Result<Vec<u8>, RenderError>;

    fn content_type(&self) -> &'static str {
        self.format().content_type()
    }

    fn file_extension(&self) -> &'static str {
        self.format().file_extension()
    }
}
