//! Report generation for a bookstore catalog.
//!
//! Records are narrowed by a [`FilterParams`], projected into a
//! [`TabularReport`] and handed to the renderer registered for the requested
//! [`ReportFormat`]:
//!
//! ```no_run
//! use quire::{FilterParams, InMemoryCatalog, ReportEngine, ReportFormat, ReportKind};
//!
//! let catalog = InMemoryCatalog::from_path("catalog.json")?;
//! let engine = ReportEngine::builder().with_catalog(catalog).build()?;
//! let report = engine.generate(ReportKind::Books, ReportFormat::Csv, &FilterParams::new().with_limit(10))?;
//! std::fs::write(report.file_name(), &report.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod projection;
pub mod registry;
pub mod render;

pub use catalog::{CatalogSource, InMemoryCatalog};
pub use engine::{
    EngineConfig, GeneratedReport, PageSize, PdfTableConfig, ReportEngine, ReportEngineBuilder,
    ReportRequest,
};
pub use error::ReportError;
pub use filter::{Dated, FilterParams};
pub use registry::RendererRegistry;
pub use render::{CsvRenderer, JsonRenderer, XmlRenderer};

pub use quire_render_core::{RenderContext, RenderError, ReportFormat, ReportRenderer};
pub use quire_render_lopdf::PdfTableRenderer;
pub use quire_types::{
    Author, Book, EntityRef, ReportKind, ReportShapeError, Role, Store, TabularReport, User,
};
