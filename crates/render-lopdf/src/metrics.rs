//! Glyph advance widths for the standard Helvetica fonts, used to wrap cell
//! text without embedding or parsing a font program.

use crate::encoding::{REPLACEMENT, win_ansi_code};

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' - '9'
    278, 278, 584, 584, 584, 556, 1015, // ':' - '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' - 'Z'
    278, 278, 278, 469, 556, 333, // '[' - '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' - 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' - 'z'
    334, 260, 334, 584, // '{' - '~'
];

/// Helvetica widths for WinAnsi bytes 0x80..=0x9F. Unassigned bytes are never
/// produced by the encoder and carry the replacement width.
const HELVETICA_WIDTHS_HIGH: [u16; 32] = [
    556, 556, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556, // 0x80 - 0x8F
    556, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 556, 500, 667, // 0x90 - 0x9F
];

/// Helvetica widths for WinAnsi bytes 0xA0..=0xFF.
const HELVETICA_WIDTHS_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0 - 0xAF
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0 - 0xBF
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0 - 0xCF
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0 - 0xDF
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0 - 0xEF
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0 - 0xFF
];

/// Helvetica-Bold runs wider than the regular face; approximated with a flat factor.
const BOLD_FACTOR: f32 = 1.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    /// Resource name the face is registered under in the page resources.
    pub(crate) fn resource_name(&self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    pub(crate) fn base_font(&self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

/// Width of the glyph actually drawn for `c`, which is `?` when WinAnsi has no code for it.
fn char_width(c: char) -> u16 {
    let code = win_ansi_code(c).unwrap_or(REPLACEMENT);
    match code {
        0x20..=0x7E => HELVETICA_WIDTHS[(code - 0x20) as usize],
        0x80..=0x9F => HELVETICA_WIDTHS_HIGH[(code - 0x80) as usize],
        0xA0..=0xFF => HELVETICA_WIDTHS_LATIN1[(code - 0xA0) as usize],
        _ => 0,
    }
}

/// Rendered width of `text` in points.
pub(crate) fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    let width = units as f32 * size / 1000.0;
    match face {
        FontFace::Regular => width,
        FontFace::Bold => width * BOLD_FACTOR,
    }
}

/// Greedy word wrap. Words wider than a whole line are split between characters.
/// Always returns at least one (possibly empty) line.
pub(crate) fn wrap_text(text: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, face, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, face, size) <= max_width {
            current = word.to_string();
        } else {
            for c in word.chars() {
                current.push(c);
                if text_width(&current, face, size) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
