pub mod records;
pub mod report;

pub use records::{Author, Book, EntityRef, Role, Store, User};
pub use report::{ParseKindError, ReportKind, ReportShapeError, TabularReport};
