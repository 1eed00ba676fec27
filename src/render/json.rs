use quire_render_core::utils::field_keys;
use quire_render_core::{RenderContext, RenderError, ReportFormat, ReportRenderer};
use quire_types::TabularReport;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Pretty-printed `{"metadata": {...}, "records": [...]}` document.
///
/// Record keys are derived from the headers and keep header order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    metadata: Metadata<'a>,
    records: Records<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    title: &'a str,
    total_records: usize,
    generated_at: String,
}

struct Records<'a> {
    keys: &'a [String],
    rows: &'a [Vec<String>],
}

struct Record<'a> {
    keys: &'a [String],
    cells: &'a [String],
}

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for cells in self.rows {
            seq.serialize_element(&Record { keys: self.keys, cells })?;
        }
        seq.end()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for (key, cell) in self.keys.iter().zip(self.cells) {
            map.serialize_entry(key, cell)?;
        }
        map.end()
    }
}

impl ReportRenderer for JsonRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, report: &TabularReport, context: &RenderContext) -> Result<Vec<u8>, RenderError> {
        let keys = field_keys(report.headers());
        let document = JsonDocument {
            metadata: Metadata {
                title: report.title(),
                total_records: report.record_count(),
                generated_at: context.timestamp(),
            },
            records: Records { keys: &keys, rows: report.rows() },
        };

        let bytes = serde_json::to_vec_pretty(&document)?;
        log::debug!("Rendered {} report as JSON ({} bytes)", report.kind(), bytes.len());
        Ok(bytes)
    }
}
