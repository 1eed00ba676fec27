use chrono::{NaiveDate, NaiveDateTime};
use quire::{Author, Book, EntityRef, InMemoryCatalog, Role, Store, User};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(h, min, 0))
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn price(value: &str) -> Option<Decimal> {
    Some(Decimal::from_str(value).expect("valid decimal"))
}

/// A book with only the required fields set.
pub fn book(id: i64, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        isbn: format!("978-0-00-{:06}", id),
        price: None,
        description: None,
        publication_year: None,
        author: None,
        store: None,
        created_at: None,
    }
}

pub fn author(id: i64, name: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        bio: None,
        books: Vec::new(),
        created_at: None,
    }
}

pub fn user(id: i64, name: &str, role: Role) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
        enabled: true,
        created_at: None,
    }
}

pub fn store(id: i64, name: &str) -> Store {
    Store {
        id,
        name: name.to_string(),
        address: None,
        phone: None,
        email: None,
        books: Vec::new(),
        created_at: None,
    }
}

/// Five books created on consecutive days in January 2024.
pub fn five_books() -> Vec<Book> {
    ["Dune", "Emma", "Ulysses", "Beloved", "Middlemarch"]
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let id = i as i64 + 1;
            Book {
                price: price("12.5"),
                created_at: at(2024, 1, id as u32, 12, 0),
                ..book(id, title)
            }
        })
        .collect()
}

/// A small catalog touching every record type and relation.
pub fn bookstore_catalog() -> InMemoryCatalog {
    let herbert = EntityRef::new(1, "Frank Herbert");
    let obrien = EntityRef::new(2, "O'Brien & Sons");
    let corner = EntityRef::new(10, "Corner Books");

    let books = vec![
        Book {
            price: price("19.99"),
            publication_year: Some(1965),
            author: Some(herbert.clone()),
            store: Some(corner.clone()),
            created_at: at(2024, 1, 15, 10, 30),
            ..book(1, "Dune")
        },
        Book {
            price: price("9.5"),
            publication_year: Some(1969),
            author: Some(herbert.clone()),
            created_at: at(2024, 2, 3, 8, 0),
            ..book(2, "Dune Messiah")
        },
        Book {
            author: Some(obrien.clone()),
            store: Some(corner.clone()),
            ..book(3, "Tales, \"Tall\" & <Short>")
        },
    ];

    let authors = vec![
        Author {
            bio: Some("American science-fiction author best known for the novel Dune".to_string()),
            books: vec![EntityRef::new(1, "Dune"), EntityRef::new(2, "Dune Messiah")],
            created_at: at(2023, 11, 2, 9, 0),
            ..author(1, "Frank Herbert")
        },
        Author {
            books: vec![EntityRef::new(3, "Tales, \"Tall\" & <Short>")],
            ..author(2, "O'Brien & Sons")
        },
        author(3, "Nobody Yet"),
    ];

    let users = vec![
        User {
            created_at: at(2024, 1, 1, 0, 0),
            ..user(1, "Ada", Role::Admin)
        },
        User {
            enabled: false,
            ..user(2, "Grace", Role::User)
        },
    ];

    let stores = vec![
        Store {
            address: Some("12 Main St".to_string()),
            phone: Some("555-0100".to_string()),
            books: vec![EntityRef::new(1, "Dune"), EntityRef::new(3, "Tales")],
            ..store(10, "Corner Books")
        },
        store(11, "Empty Shelf"),
    ];

    InMemoryCatalog::new()
        .with_books(books)
        .with_authors(authors)
        .with_users(users)
        .with_stores(stores)
}
