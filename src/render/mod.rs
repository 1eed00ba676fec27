//! Text-based renderers. The PDF table renderer lives in `quire-render-lopdf`.

mod csv;
mod json;
mod xml;

pub use self::csv::CsvRenderer;
pub use self::json::JsonRenderer;
pub use self::xml::XmlRenderer;
