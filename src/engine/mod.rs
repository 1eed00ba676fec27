//! Report dispatch: renderer lookup, validation, filtering, projection and
//! rendering, in that order.

mod batch;
mod builder;
mod config;

pub use batch::ReportRequest;
pub use builder::ReportEngineBuilder;
pub use config::{EngineConfig, PageSize, PdfTableConfig};

use crate::catalog::CatalogSource;
use crate::error::ReportError;
use crate::filter::{self, FilterParams};
use crate::projection::{AUTHORS, BOOKS, STORES, USERS, books_by_author};
use crate::registry::RendererRegistry;
use chrono::NaiveDateTime;
use quire_render_core::{RenderContext, ReportFormat, ReportRenderer};
use quire_types::{ReportKind, TabularReport};
use std::sync::Arc;

/// A rendered report together with the metadata a caller needs to deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub file_extension: &'static str,
    pub kind: ReportKind,
    pub format: ReportFormat,
    pub record_count: usize,
    pub generated_at: NaiveDateTime,
}

impl GeneratedReport {
    /// Download name such as `books_report_2024-03-01.csv`.
    pub fn file_name(&self) -> String {
        format!(
            "{}_report_{}{}",
            self.kind.slug(),
            self.generated_at.format("%Y-%m-%d"),
            self.file_extension
        )
    }
}

/// Generates reports from a catalog. Immutable once built and safe to share
/// between threads.
pub struct ReportEngine {
    catalog: Arc<dyn CatalogSource>,
    registry: Arc<RendererRegistry>,
    config: EngineConfig,
}

impl ReportEngine {
    pub(crate) fn new(
        catalog: Arc<dyn CatalogSource>,
        registry: RendererRegistry,
        config: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            registry: Arc::new(registry),
            config,
        }
    }

    pub fn builder() -> ReportEngineBuilder {
        ReportEngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Generates one report, stamped with the current time.
    pub fn generate(
        &self,
        kind: ReportKind,
        format: ReportFormat,
        params: &FilterParams,
    ) -> Result<GeneratedReport, ReportError> {
        self.generate_with_context(kind, format, params, RenderContext::now())
    }

    /// Like [`generate`](Self::generate) with an explicit render context.
    pub fn generate_with_context(
        &self,
        kind: ReportKind,
        format: ReportFormat,
        params: &FilterParams,
        context: RenderContext,
    ) -> Result<GeneratedReport, ReportError> {
        let renderer = self.registry.resolve(format)?;
        filter::validate(kind, params)?;
        let report = self.build_report(kind, params)?;
        self.render(report, renderer.as_ref(), context)
    }

    /// Parses the kind and format identifiers, then generates.
    pub fn generate_named(
        &self,
        kind: &str,
        format: &str,
        params: &FilterParams,
    ) -> Result<GeneratedReport, ReportError> {
        let kind: ReportKind = kind.parse()?;
        let format: ReportFormat = format.parse()?;
        self.generate(kind, format, params)
    }

    /// Books export that honours only a result limit. Columns match the
    /// `BOOKS` report for the same data.
    pub fn export_books(
        &self,
        format: ReportFormat,
        limit: Option<usize>,
    ) -> Result<GeneratedReport, ReportError> {
        let renderer = self.registry.resolve(format)?;
        let books = filter::apply_limit(self.catalog.books(), limit);
        let report = BOOKS.build(&books)?;
        self.render(report, renderer.as_ref(), RenderContext::now())
    }

    /// Projects the kind's filtered collection without rendering it.
    pub fn build_report(
        &self,
        kind: ReportKind,
        params: &FilterParams,
    ) -> Result<TabularReport, ReportError> {
        let report = match kind {
            ReportKind::Books => BOOKS.build(&filter::apply(self.catalog.books(), params))?,
            ReportKind::Authors => AUTHORS.build(&filter::apply(self.catalog.authors(), params))?,
            ReportKind::Users => USERS.build(&filter::apply(self.catalog.users(), params))?,
            ReportKind::Stores => STORES.build(&filter::apply(self.catalog.stores(), params))?,
            ReportKind::BooksByAuthor => {
                let author_id = params.author_id.ok_or(ReportError::MissingParameter {
                    kind,
                    parameter: "author_id",
                })?;
                let author = self
                    .catalog
                    .find_author(author_id)
                    .ok_or(ReportError::NotFound { entity: "Author", id: author_id })?;
                let books = self.catalog.books_by_author(author_id);
                books_by_author(author, &filter::apply(&books, params))?
            }
        };
        Ok(report)
    }

    fn render(
        &self,
        report: TabularReport,
        renderer: &dyn ReportRenderer,
        context: RenderContext,
    ) -> Result<GeneratedReport, ReportError> {
        let format = renderer.format();
        let bytes = renderer.render(&report, &context)?;
        log::info!(
            "Generated {} report as {}: {} records, {} bytes",
            report.kind(),
            format,
            report.record_count(),
            bytes.len()
        );
        Ok(GeneratedReport {
            bytes,
            content_type: renderer.content_type(),
            file_extension: renderer.file_extension(),
            kind: report.kind(),
            format,
            record_count: report.record_count(),
            generated_at: context.generated_at,
        })
    }

    /// Formats this engine can render, in declaration order.
    pub fn available_formats(&self) -> Vec<ReportFormat> {
        self.registry.formats()
    }

    /// Report kinds the caller may request. Restricted kinds are listed only
    /// for privileged callers.
    pub fn available_kinds(&self, is_privileged: bool) -> Vec<ReportKind> {
        ReportKind::ALL
            .into_iter()
            .filter(|kind| is_privileged || !kind.is_restricted())
            .collect()
    }

    pub fn content_type(&self, format: ReportFormat) -> Result<&'static str, ReportError> {
        self.registry.content_type(format)
    }

    pub fn file_extension(&self, format: ReportFormat) -> Result<&'static str, ReportError> {
        self.registry.file_extension(format)
    }
}
