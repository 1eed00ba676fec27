use crate::encoding::to_win_ansi;
use crate::layout::{PdfTableConfig, TableComposer};
use crate::metrics::FontFace;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use quire_render_core::{RenderContext, RenderError, ReportFormat, ReportRenderer};
use quire_types::TabularReport;

const PRODUCER: &str = "quire";

/// Renders a report as a paginated table using the `lopdf` library.
///
/// The whole document is assembled in memory and serialized in one pass, so a
/// failure never leaves a truncated file behind.
#[derive(Debug, Clone, Default)]
pub struct PdfTableRenderer {
    config: PdfTableConfig,
}

impl PdfTableRenderer {
    pub fn new(config: PdfTableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PdfTableConfig {
        &self.config
    }

    fn compose_pages(
        &self,
        report: &TabularReport,
        context: &RenderContext,
    ) -> (Vec<Content>, (f32, f32)) {
        let mut composer = TableComposer::new(&self.config, report.width());
        composer.draw_title(report.title());

        let header = composer.wrap_row(report.headers(), FontFace::Bold, self.config.header_font_size);
        composer.draw_header(&header);

        for cells in report.rows() {
            let row = composer.wrap_row(cells, FontFace::Regular, self.config.cell_font_size);
            composer.draw_body_row(row, &header);
        }

        composer.draw_footer(&format!(
            "Total records: {} | Generated on: {}",
            report.record_count(),
            context.timestamp()
        ));

        let dimensions = composer.page_dimensions();
        (composer.finish(), dimensions)
    }
}

impl ReportRenderer for PdfTableRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn render(&self, report: &TabularReport, context: &RenderContext) -> Result<Vec<u8>, RenderError> {
        let (pages, (page_width, page_height)) = self.compose_pages(report, context);

        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = register_fonts(&mut document);

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
        for content in pages {
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let page_count = page_ids.len();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.into_iter().map(Object::Reference).collect::<Vec<Object>>(),
            "Count" => page_count as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        let info_id = document.add_object(dictionary! {
            "Title" => Object::String(to_win_ansi(report.title()), StringFormat::Literal),
            "Producer" => Object::string_literal(PRODUCER),
        });
        document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;

        log::debug!(
            "Rendered {} report as PDF: {} rows on {} pages ({} bytes)",
            report.kind(),
            report.record_count(),
            page_count,
            buffer.len()
        );
        Ok(buffer)
    }
}

/// Adds the regular and bold Helvetica faces and returns the shared resources dictionary id.
fn register_fonts(document: &mut Document) -> ObjectId {
    let mut font_dict = Dictionary::new();
    for face in [FontFace::Regular, FontFace::Bold] {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        font_dict.set(face.resource_name(), font_id);
    }
    document.add_object(dictionary! { "Font" => font_dict })
}
