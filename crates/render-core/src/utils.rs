/// Derives a record field name from a column header: lower-cased with spaces
/// replaced by underscores (`Created At` becomes `created_at`).
///
/// Any other character that is not alphanumeric is also mapped to `_` so the
/// result is usable as a JSON key and an XML element name alike.
pub fn field_key(header: &str) -> String {
    header
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Field keys for a full header row, in header order.
pub fn field_keys(headers: &[String]) -> Vec<String> {
    headers.iter().map(|h| field_key(h)).collect()
}
