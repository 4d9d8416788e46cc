//! Delimited encoder producing files the importer reads back

use crate::codec::{self, DELIMITER};
use crate::error::ExportError;
use crate::types::Catalog;
use std::io::Write;

/// Column names written as the header line
const HEADER: [&str; 7] = [
    "isbn",
    "title",
    "language",
    "authors",
    "date",
    "genre",
    "description",
];

/// Encoder for the `;`-separated import layout
///
/// Books keep catalog order. Descriptions are wrapped in double quotes, which
/// the importer strips again.
#[derive(Default)]
pub struct DelimitedEncoder;

impl DelimitedEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl super::CatalogEncoder for DelimitedEncoder {
    fn encode(&self, catalog: &Catalog, writer: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(writer, "{}", HEADER.join(&DELIMITER.to_string()))?;
        for book in &catalog.books {
            let mut quoted = book.clone();
            quoted.description = format!("\"{}\"", book.description);
            writeln!(writer, "{}", codec::encode(&quoted))?;
        }
        Ok(())
    }

    fn format_name(&self) -> &str {
        "CSV"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn mime_type(&self) -> &str {
        "text/csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CatalogEncoder;
    use crate::import;
    use crate::types::Book;

    #[test]
    fn test_output_is_importable() {
        let mut catalog = Catalog::default();
        catalog.add(Book::new("1", "Dune").with_description("\"Spice\" must flow"));
        catalog.add(Book::new("2", "Emma"));

        let mut out = Vec::new();
        DelimitedEncoder::new().encode(&catalog, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("isbn;title;language;authors;date;genre;description\n"));

        let mut copy = Catalog::default();
        assert_eq!(import::import_str(&mut copy, &text), 2);
        assert_eq!(copy.books, catalog.books);
    }
}
