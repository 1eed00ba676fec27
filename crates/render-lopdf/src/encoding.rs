//! WinAnsiEncoding (CP1252) for text drawn with the standard Type1 fonts.

/// Code points CP1252 places in 0x80..=0x9F. Bytes 0x81, 0x8D, 0x8F, 0x90
/// and 0x9D are unassigned.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80), // €
    ('\u{201A}', 0x82), // ‚
    ('\u{0192}', 0x83), // ƒ
    ('\u{201E}', 0x84), // „
    ('\u{2026}', 0x85), // …
    ('\u{2020}', 0x86), // †
    ('\u{2021}', 0x87), // ‡
    ('\u{02C6}', 0x88), // ˆ
    ('\u{2030}', 0x89), // ‰
    ('\u{0160}', 0x8A), // Š
    ('\u{2039}', 0x8B), // ‹
    ('\u{0152}', 0x8C), // Œ
    ('\u{017D}', 0x8E), // Ž
    ('\u{2018}', 0x91), // ‘
    ('\u{2019}', 0x92), // ’
    ('\u{201C}', 0x93), // “
    ('\u{201D}', 0x94), // ”
    ('\u{2022}', 0x95), // •
    ('\u{2013}', 0x96), // –
    ('\u{2014}', 0x97), // —
    ('\u{02DC}', 0x98), // ˜
    ('\u{2122}', 0x99), // ™
    ('\u{0161}', 0x9A), // š
    ('\u{203A}', 0x9B), // ›
    ('\u{0153}', 0x9C), // œ
    ('\u{017E}', 0x9E), // ž
    ('\u{0178}', 0x9F), // Ÿ
];

/// Byte drawn for characters WinAnsi cannot represent.
pub(crate) const REPLACEMENT: u8 = b'?';

/// The WinAnsi byte for `c`, if the encoding has one.
///
/// U+0080..=U+009F are C1 control characters, not the glyphs CP1252 puts at
/// those byte values, so they have no encoding.
pub(crate) fn win_ansi_code(c: char) -> Option<u8> {
    match c as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(c as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(mapped, _)| *mapped == c)
            .map(|(_, byte)| *byte),
    }
}

/// Encodes `s` for a `Tj` operand or a document info string.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| win_ansi_code(c).unwrap_or(REPLACEMENT))
        .collect()
}
