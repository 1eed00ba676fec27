use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quire_render_core::utils::field_keys;
use quire_render_core::{RenderContext, RenderError, ReportFormat, ReportRenderer};
use quire_types::TabularReport;
use std::fmt::Display;

/// UTF-8 XML document rooted at `<{kind}Report>`, holding a `<metadata>`
/// block followed by `<records>`.
///
/// Each record element is named after the singular report kind and holds one
/// child per column, named by the column's field key.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRenderer;

type XmlWriter = Writer<Vec<u8>>;

fn xml_error(e: impl Display) -> RenderError {
    RenderError::Xml(e.to_string())
}

fn start(writer: &mut XmlWriter, name: &str) -> Result<(), RenderError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<(), RenderError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

/// Writes `<name>text</name>` with all five reserved characters escaped.
fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), RenderError> {
    start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::from_escaped(escape(text))))
        .map_err(xml_error)?;
    end(writer, name)
}

impl ReportRenderer for XmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Xml
    }

    fn render(&self, report: &TabularReport, context: &RenderContext) -> Result<Vec<u8>, RenderError> {
        let root = format!("{}Report", report.kind().slug());
        let item = report.kind().item_name();
        let keys = field_keys(report.headers());

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        start(&mut writer, &root)?;

        start(&mut writer, "metadata")?;
        text_element(&mut writer, "title", report.title())?;
        text_element(&mut writer, "totalRecords", &report.record_count().to_string())?;
        text_element(&mut writer, "generatedAt", &context.timestamp())?;
        end(&mut writer, "metadata")?;

        start(&mut writer, "records")?;
        for row in report.rows() {
            start(&mut writer, &item)?;
            for (key, cell) in keys.iter().zip(row) {
                text_element(&mut writer, key, cell)?;
            }
            end(&mut writer, &item)?;
        }
        end(&mut writer, "records")?;

        end(&mut writer, &root)?;

        let bytes = writer.into_inner();
        log::debug!("Rendered {} report as XML ({} bytes)", report.kind(), bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_types::ReportKind;

    fn render(kind: ReportKind, title: &str, rows: Vec<Vec<&str>>) -> String {
        let headers = vec!["ID".to_string(), "Title".to_string(), "Created At".to_string()];
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect();
        let report = TabularReport::new(kind, title, headers, rows).unwrap();
        let bytes = XmlRenderer.render(&report, &RenderContext::default()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_document_structure() {
        let xml = render(ReportKind::Books, "Books Report", vec![vec!["1", "Dune", "2024-01-15"]]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

        let doc = roxmltree::Document::parse(&xml).unwrap();
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "booksReport");

        let children: Vec<&str> = root
            .children()
            .filter(|n| n.is_element())
            .map(|n| n.tag_name().name())
            .collect();
        assert_eq!(children, vec!["metadata", "records"]);

        let book = root
            .descendants()
            .find(|n| n.has_tag_name("book"))
            .unwrap();
        let fields: Vec<(&str, &str)> = book
            .children()
            .filter(|n| n.is_element())
            .map(|n| (n.tag_name().name(), n.text().unwrap_or("")))
            .collect();
        assert_eq!(
            fields,
            vec![("id", "1"), ("title", "Dune"), ("created_at", "2024-01-15")]
        );
    }

    #[test]
    fn test_title_is_escaped_and_round_trips() {
        let title = "Books by Author: O'Brien & Sons";
        let xml = render(ReportKind::BooksByAuthor, title, vec![]);
        assert!(xml.contains("O&apos;Brien &amp; Sons"));

        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "books_by_authorReport");
        let parsed = doc
            .descendants()
            .find(|n| n.has_tag_name("title"))
            .and_then(|n| n.text())
            .unwrap();
        assert_eq!(parsed, title);
    }

    #[test]
    fn test_cells_with_markup_round_trip() {
        let nasty = r#"<b>"Fish" & 'Chips'</b>"#;
        let xml = render(ReportKind::Stores, "Stores Report", vec![vec!["1", nasty, "N/A"]]);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let store = doc.descendants().find(|n| n.has_tag_name("store")).unwrap();
        let title = store
            .children()
            .find(|n| n.has_tag_name("title"))
            .and_then(|n| n.text())
            .unwrap();
        assert_eq!(title, nasty);
    }

    #[test]
    fn test_empty_report_has_zero_total() {
        let xml = render(ReportKind::Users, "System Users Report", vec![]);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let total = doc
            .descendants()
            .find(|n| n.has_tag_name("totalRecords"))
            .and_then(|n| n.text())
            .unwrap();
        assert_eq!(total, "0");
        assert_eq!(doc.descendants().filter(|n| n.has_tag_name("user")).count(), 0);
    }
}
