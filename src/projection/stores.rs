use super::{Projection, date, or_na};
use quire_types::{ReportKind, Store};

pub const STORES: Projection<Store> = Projection {
    kind: ReportKind::Stores,
    title: "Stores Report",
    headers: &["ID", "Name", "Address", "Phone", "Email", "Books Count", "Created At"],
    row: store_row,
};

fn store_row(store: &Store) -> Vec<String> {
    vec![
        store.id.to_string(),
        store.name.clone(),
        or_na(store.address.as_deref()),
        or_na(store.phone.as_deref()),
        or_na(store.email.as_deref()),
        store.books.len().to_string(),
        date(store.created_at),
    ]
}
