// src/engine/builder.rs
use super::ReportEngine;
use super::config::{EngineConfig, PageSize, PdfTableConfig};
use crate::catalog::{CatalogSource, InMemoryCatalog};
use crate::error::ReportError;
use crate::registry::RendererRegistry;
use quire_render_core::{ReportFormat, ReportRenderer};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `ReportEngine`.
#[derive(Default)]
pub struct ReportEngineBuilder {
    catalog: Option<Arc<dyn CatalogSource>>,
    config: EngineConfig,
    renderers: Vec<Arc<dyn ReportRenderer>>,
}

impl ReportEngineBuilder {
    /// Creates a builder with every built-in format enabled and A4 PDF pages.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the source the engine reads records from.
    pub fn with_catalog<C: CatalogSource + 'static>(mut self, catalog: C) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    pub fn with_shared_catalog(mut self, catalog: Arc<dyn CatalogSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Loads an [`InMemoryCatalog`] from a JSON file.
    pub fn with_catalog_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ReportError> {
        let catalog = InMemoryCatalog::from_path(path)?;
        Ok(self.with_catalog(catalog))
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_pdf_config(mut self, pdf: PdfTableConfig) -> Self {
        self.config.pdf = pdf;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.config.pdf.page_size = page_size;
        self
    }

    /// Restricts the built-in renderers to `formats`.
    pub fn with_formats<I: IntoIterator<Item = ReportFormat>>(mut self, formats: I) -> Self {
        self.config.formats = formats.into_iter().collect();
        self
    }

    /// Adds a renderer, replacing the built-in one for the same format.
    /// Renderers added here are enabled regardless of [`with_formats`](Self::with_formats).
    pub fn with_renderer<R: ReportRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderers.push(Arc::new(renderer));
        self
    }

    /// Consumes the builder and creates the `ReportEngine`.
    pub fn build(self) -> Result<ReportEngine, ReportError> {
        let catalog = self.catalog.ok_or_else(|| {
            ReportError::Config(
                "No catalog has been configured. Use `with_catalog` or `with_catalog_file`."
                    .to_string(),
            )
        })?;

        let mut registry = RendererRegistry::with_defaults(self.config.pdf.clone());
        registry.retain_formats(&self.config.formats);
        for renderer in self.renderers {
            registry.register_shared(renderer);
        }

        if registry.is_empty() {
            return Err(ReportError::Config("No output formats are enabled.".to_string()));
        }

        log::info!("Report engine ready with formats {:?}", registry.formats());
        Ok(ReportEngine::new(catalog, registry, self.config))
    }
}
