use super::{Projection, date, truncate};
use quire_types::{Author, ReportKind};

pub const AUTHORS: Projection<Author> = Projection {
    kind: ReportKind::Authors,
    title: "Authors Report",
    headers: &["ID", "Name", "Bio", "Books Count", "Created At"],
    row: author_row,
};

fn author_row(author: &Author) -> Vec<String> {
    vec![
        author.id.to_string(),
        author.name.clone(),
        truncate(author.bio.as_deref()),
        author.books.len().to_string(),
        date(author.created_at),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_types::EntityRef;

    #[test]
    fn test_long_bio_is_shortened() {
        let author = Author {
            id: 2,
            name: "Ursula K. Le Guin".into(),
            bio: Some("American author best known for her works of speculative fiction".into()),
            books: vec![EntityRef::new(1, "A Wizard of Earthsea"), EntityRef::new(2, "The Dispossessed")],
            created_at: None,
        };
        let report = AUTHORS.build(&[author]).unwrap();
        let row = &report.rows()[0];
        assert_eq!(row[2], "American author best known for her works of specul...");
        assert_eq!(row[3], "2");
        assert_eq!(row[4], "N/A");
    }

    #[test]
    fn test_author_without_books_or_bio() {
        let author = Author {
            id: 5,
            name: "Anonymous".into(),
            bio: None,
            books: Vec::new(),
            created_at: None,
        };
        let report = AUTHORS.build(&[author]).unwrap();
        assert_eq!(report.rows()[0], vec!["5", "Anonymous", "N/A", "0", "N/A"]);
    }
}
