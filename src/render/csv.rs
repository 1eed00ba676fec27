use csv::{Terminator, WriterBuilder};
use quire_render_core::{RenderContext, RenderError, ReportFormat, ReportRenderer};
use quire_types::TabularReport;

/// Header row followed by one line per record, `\n` terminated.
///
/// Fields holding a comma, a quote or a line break are quoted and inner quotes
/// doubled. No title or metadata is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }

    fn render(&self, report: &TabularReport, _context: &RenderContext) -> Result<Vec<u8>, RenderError> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(report.headers()).map_err(csv_error)?;
        for row in report.rows() {
            writer.write_record(row).map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| RenderError::Csv(e.to_string()))?;
        log::debug!("Rendered {} report as CSV ({} bytes)", report.kind(), bytes.len());
        Ok(bytes)
    }
}

fn csv_error(e: csv::Error) -> RenderError {
    RenderError::Csv(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_types::ReportKind;

    fn report(rows: Vec<Vec<&str>>) -> TabularReport {
        let headers = vec!["ID".to_string(), "Title".to_string()];
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect();
        TabularReport::new(ReportKind::Books, "Books Report", headers, rows).unwrap()
    }

    fn render(report: &TabularReport) -> String {
        let bytes = CsvRenderer.render(report, &RenderContext::default()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_plain_rows() {
        let out = render(&report(vec![vec!["1", "Dune"], vec!["2", "Emma"]]));
        assert_eq!(out, "ID,Title\n1,Dune\n2,Emma\n");
    }

    #[test]
    fn test_empty_report_is_header_only() {
        assert_eq!(render(&report(vec![])), "ID,Title\n");
    }

    #[test]
    fn test_reserved_characters_are_quoted() {
        let out = render(&report(vec![vec!["1", "Hello, \"World\""]]));
        assert_eq!(out, "ID,Title\n1,\"Hello, \"\"World\"\"\"\n");
    }

    #[test]
    fn test_parser_recovers_cells() {
        let original = vec![
            vec!["1", "Line one\nline two"],
            vec!["2", "a,b,\"c\""],
            vec!["3", "Ærø"],
        ];
        let out = render(&report(original.clone()));

        let mut reader = csv::ReaderBuilder::new().from_reader(out.as_bytes());
        let parsed: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(parsed, original);
    }
}
