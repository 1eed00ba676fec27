//! Read access to the materialized record collections the engine reports on.

use crate::error::ReportError;
use quire_types::{Author, Book, Store, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supplies fully populated record collections. Implementations must not block
/// on I/O; the engine assumes the data is already in memory.
pub trait CatalogSource: Send + Sync {
    fn books(&self) -> &[Book];
    fn authors(&self) -> &[Author];
    fn users(&self) -> &[User];
    fn stores(&self) -> &[Store];

    fn find_author(&self, id: i64) -> Option<&Author> {
        self.authors().iter().find(|author| author.id == id)
    }

    /// Books whose author reference points at `author_id`, in catalog order.
    fn books_by_author(&self, author_id: i64) -> Vec<Book> {
        self.books()
            .iter()
            .filter(|book| book.author.as_ref().is_some_and(|a| a.id == author_id))
            .cloned()
            .collect()
    }
}

/// A catalog held entirely in memory, typically loaded from a JSON export of
/// the form `{"books": [...], "authors": [...], "users": [...], "stores": [...]}`.
/// Missing collections are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryCatalog {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub users: Vec<User>,
    pub stores: Vec<Store>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::Catalog(format!("Invalid catalog JSON: {}", e)))?;
        log::debug!(
            "Loaded catalog: {} books, {} authors, {} users, {} stores",
            catalog.books.len(),
            catalog.authors.len(),
            catalog.users.len(),
            catalog.stores.len()
        );
        Ok(catalog)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ReportError::Catalog(format!("Failed to read catalog from '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_stores(mut self, stores: Vec<Store>) -> Self {
        self.stores = stores;
        self
    }
}

impl CatalogSource for InMemoryCatalog {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn users(&self) -> &[User] {
        &self.users
    }

    fn stores(&self) -> &[Store] {
        &self.stores
    }
}
