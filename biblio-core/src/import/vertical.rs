//! Legacy vertical import: one field per line, seven lines per record

use super::{ImportFormat, RecordDecoder};
use crate::types::Book;

/// Decoder for the one-field-per-line layout
///
/// Fields come in the order id, title, language, authors, date, description,
/// genre. Description and genre are swapped compared to the delimited layout;
/// files written by older versions depend on it, so the order is kept as is.
#[derive(Default)]
pub struct VerticalDecoder;

impl VerticalDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for VerticalDecoder {
    fn decode(&self, content: &str) -> Vec<Book> {
        let mut lines = content.lines();
        let mut books = Vec::new();

        while let Some(id) = lines.next() {
            // A blank line where an id is expected separates groups
            if id.is_empty() {
                continue;
            }
            let mut next = || lines.next().unwrap_or_default().to_string();

            let title = next();
            let language = next();
            let authors = next();
            let date = next();
            let description = next();
            let genre = next();

            books.push(Book {
                id: id.to_string(),
                title,
                language,
                authors,
                date,
                genre,
                description,
            });
        }

        books
    }

    fn format(&self) -> ImportFormat {
        ImportFormat::Vertical
    }
}
