// src/registry.rs
use crate::error::ReportError;
use crate::render::{CsvRenderer, JsonRenderer, XmlRenderer};
use quire_render_core::{ReportFormat, ReportRenderer};
use quire_render_lopdf::{PdfTableConfig, PdfTableRenderer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps each output format to the renderer that produces it.
///
/// Filled once while the engine is built and only read afterwards.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<ReportFormat, Arc<dyn ReportRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding all four built-in renderers.
    pub fn with_defaults(pdf_config: PdfTableConfig) -> Self {
        let mut registry = Self::new();
        registry.register(CsvRenderer);
        registry.register(JsonRenderer);
        registry.register(XmlRenderer);
        registry.register(PdfTableRenderer::new(pdf_config));
        registry
    }

    /// Registers `renderer` under its own format, replacing any previous one.
    pub fn register<R: ReportRenderer + 'static>(&mut self, renderer: R) {
        self.register_shared(Arc::new(renderer));
    }

    pub fn register_shared(&mut self, renderer: Arc<dyn ReportRenderer>) {
        let format = renderer.format();
        if self.renderers.insert(format, renderer).is_some() {
            log::debug!("Replaced renderer for {}", format);
        }
    }

    /// Drops every format not listed in `formats`.
    pub fn retain_formats(&mut self, formats: &[ReportFormat]) {
        self.renderers.retain(|format, _| formats.contains(format));
    }

    pub fn resolve(&self, format: ReportFormat) -> Result<Arc<dyn ReportRenderer>, ReportError> {
        self.renderers
            .get(&format)
            .cloned()
            .ok_or_else(|| ReportError::UnsupportedFormat(format.to_string()))
    }

    pub fn content_type(&self, format: ReportFormat) -> Result<&'static str, ReportError> {
        Ok(self.resolve(format)?.content_type())
    }

    pub fn file_extension(&self, format: ReportFormat) -> Result<&'static str, ReportError> {
        Ok(self.resolve(format)?.file_extension())
    }

    /// Registered formats in declaration order.
    pub fn formats(&self) -> Vec<ReportFormat> {
        let mut formats: Vec<ReportFormat> = self.renderers.keys().copied().collect();
        formats.sort();
        formats
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
