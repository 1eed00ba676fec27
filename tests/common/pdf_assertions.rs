use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// Collects the operand of every `Tj` operation, page by page.
pub fn page_texts(doc: &LopdfDocument) -> Vec<Vec<String>> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let Ok(raw) = doc.get_page_content(*page_id) else {
                return Vec::new();
            };
            let Ok(content) = Content::decode(&raw) else {
                return Vec::new();
            };
            content
                .operations
                .into_iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(decode_win_ansi(bytes)),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

/// Characters WinAnsi places at bytes 0x80..=0x9F; `None` marks unassigned bytes.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WIN_ANSI_HIGH[(b - 0x80) as usize].unwrap_or('\u{FFFD}'),
            _ => b as char,
        })
        .collect()
}

/// The `(x, y)` operands of every `Td` operation, page by page.
pub fn text_positions(doc: &LopdfDocument) -> Vec<Vec<(f32, f32)>> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let Ok(raw) = doc.get_page_content(*page_id) else {
                return Vec::new();
            };
            let Ok(content) = Content::decode(&raw) else {
                return Vec::new();
            };
            content
                .operations
                .into_iter()
                .filter(|op| op.operator == "Td")
                .filter_map(|op| match op.operands.as_slice() {
                    [x, y] => Some((x.as_float().ok()?, y.as_float().ok()?)),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

/// Every string drawn anywhere in the document.
pub fn all_texts(doc: &LopdfDocument) -> Vec<String> {
    page_texts(doc).into_iter().flatten().collect()
}

/// Assert that some drawn string equals `text` exactly
#[macro_export]
macro_rules! assert_pdf_draws {
    ($pdf:expr, $text:expr) => {
        let drawn = $crate::common::pdf_assertions::all_texts(&$pdf.doc);
        assert!(
            drawn.iter().any(|t| t == $text),
            "PDF should draw '{}', but drawn strings were:\n{:?}",
            $text,
            drawn
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
