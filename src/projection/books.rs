use super::{NOT_AVAILABLE, Projection, date, money, or_na};
use quire_types::{Author, Book, EntityRef, ReportKind, ReportShapeError, TabularReport};

pub const BOOKS: Projection<Book> = Projection {
    kind: ReportKind::Books,
    title: "Books Report",
    headers: &["ID", "Title", "ISBN", "Price", "Author", "Store", "Created At"],
    row: book_row,
};

/// Title is completed with the author's name by [`books_by_author`].
pub const BOOKS_BY_AUTHOR: Projection<Book> = Projection {
    kind: ReportKind::BooksByAuthor,
    title: "Books by Author",
    headers: &["ID", "Title", "ISBN", "Price", "Publication Year", "Store", "Created At"],
    row: authored_book_row,
};

/// Projects one author's books under a title naming the author.
pub fn books_by_author(author: &Author, books: &[Book]) -> Result<TabularReport, ReportShapeError> {
    let title = format!("{}: {}", BOOKS_BY_AUTHOR.title, author.name);
    BOOKS_BY_AUTHOR.build_titled(title, books)
}

fn name_of(entity: &Option<EntityRef>) -> String {
    or_na(entity.as_ref().map(|e| e.name.as_str()))
}

fn book_row(book: &Book) -> Vec<String> {
    vec![
        book.id.to_string(),
        book.title.clone(),
        book.isbn.clone(),
        money(book.price),
        name_of(&book.author),
        name_of(&book.store),
        date(book.created_at),
    ]
}

fn authored_book_row(book: &Book) -> Vec<String> {
    vec![
        book.id.to_string(),
        book.title.clone(),
        book.isbn.clone(),
        money(book.price),
        book.publication_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        name_of(&book.store),
        date(book.created_at),
    ]
}
