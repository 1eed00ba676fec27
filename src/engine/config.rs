// src/engine/config.rs
pub use quire_render_lopdf::{PageSize, PdfTableConfig};
use quire_render_core::ReportFormat;
use serde::{Deserialize, Serialize};

/// Settings fixed when the engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Page geometry and fonts for PDF output.
    pub pdf: PdfTableConfig,
    /// Formats the engine will render. Anything else is reported as unsupported.
    pub formats: Vec<ReportFormat>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pdf: PdfTableConfig::default(),
            formats: ReportFormat::ALL.to_vec(),
        }
    }
}
