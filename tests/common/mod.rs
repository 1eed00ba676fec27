pub mod fixtures;
pub mod pdf_assertions;

use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;
use quire::{
    FilterParams, GeneratedReport, InMemoryCatalog, RenderContext, ReportEngine, ReportError,
    ReportFormat, ReportKind,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings drawn on each page, in drawing order.
    pub fn page_texts(&self) -> Vec<Vec<String>> {
        pdf_assertions::page_texts(&self.doc)
    }

    pub fn text_positions(&self) -> Vec<Vec<(f32, f32)>> {
        pdf_assertions::text_positions(&self.doc)
    }
}

/// The fixed timestamp every test report is stamped with.
pub fn fixed_context() -> RenderContext {
    RenderContext::at(
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 15, 0))
            .expect("valid timestamp"),
    )
}

pub fn engine_for(catalog: InMemoryCatalog) -> ReportEngine {
    ReportEngine::builder()
        .with_catalog(catalog)
        .build()
        .expect("engine builds with a catalog")
}

/// Generates a report with the fixed test timestamp.
pub fn generate(
    engine: &ReportEngine,
    kind: ReportKind,
    format: ReportFormat,
    params: &FilterParams,
) -> Result<GeneratedReport, ReportError> {
    engine.generate_with_context(kind, format, params, fixed_context())
}

pub fn generate_text(
    engine: &ReportEngine,
    kind: ReportKind,
    format: ReportFormat,
    params: &FilterParams,
) -> Result<String, Box<dyn std::error::Error>> {
    let report = generate(engine, kind, format, params)?;
    Ok(String::from_utf8(report.bytes)?)
}

pub fn generate_pdf(
    engine: &ReportEngine,
    kind: ReportKind,
    params: &FilterParams,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let report = generate(engine, kind, ReportFormat::Pdf, params)?;
    GeneratedPdf::from_bytes(report.bytes)
}
