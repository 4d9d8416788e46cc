//! Importers for external book lists
//!
//! Two layouts are accepted and told apart by their first line: if it holds
//! the delimiter the file is [`ImportFormat::Delimited`] (header line plus one
//! record per line), otherwise it is the legacy [`ImportFormat::Vertical`]
//! layout with one field per line.

mod delimited;
mod vertical;

pub use delimited::DelimitedDecoder;
pub use vertical::VerticalDecoder;

use crate::codec::DELIMITER;
use crate::error::StorageError;
use crate::storage::StorageResult;
use crate::types::{Book, Catalog};
use std::fs;
use std::path::Path;

/// Shape of an import file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Header line, then one delimited record per line
    Delimited,
    /// Seven lines per record, no header, no escaping
    Vertical,
}

/// Trait for turning the text of an import file into books
pub trait RecordDecoder {
    /// Parse every record the content holds. Unusable entries are dropped.
    fn decode(&self, content: &str) -> Vec<Book>;

    /// The layout this decoder reads
    fn format(&self) -> ImportFormat;
}

/// Guess the layout from the first line of the content
pub fn detect_format(content: &str) -> ImportFormat {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.contains(DELIMITER) {
        ImportFormat::Delimited
    } else {
        ImportFormat::Vertical
    }
}

/// Get the decoder for a layout
pub fn decoder_for_format(format: ImportFormat) -> Box<dyn RecordDecoder> {
    match format {
        ImportFormat::Delimited => Box::new(DelimitedDecoder::new()),
        ImportFormat::Vertical => Box::new(VerticalDecoder::new()),
    }
}

/// Add books whose identifier is not in the catalog yet, returning how many were added
///
/// The check runs against the growing catalog, so a duplicate inside `books`
/// is skipped as well.
pub fn merge(catalog: &mut Catalog, books: Vec<Book>) -> usize {
    let mut added = 0;
    for book in books {
        if catalog.exists_by_id(&book.id) {
            tracing::debug!("Skipping duplicate identifier {}", book.id);
            continue;
        }
        catalog.add(book);
        added += 1;
    }
    added
}

/// Import already-read content into the catalog
pub fn import_str(catalog: &mut Catalog, content: &str) -> usize {
    let decoder = decoder_for_format(detect_format(content));
    let books = decoder.decode(content);
    let read = books.len();
    let added = merge(catalog, books);

    tracing::debug!(
        format = ?decoder.format(),
        read,
        added,
        "Imported records"
    );
    added
}

/// Import a file into the catalog, returning the number of books actually added
///
/// The catalog is not saved.
pub fn import_file(catalog: &mut Catalog, path: &Path) -> StorageResult<usize> {
    let bytes = fs::read(path).map_err(|e| {
        tracing::debug!("Cannot read import file {}: {}", path.display(), e);
        StorageError::NotFound(path.to_path_buf())
    })?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(import_str(catalog, &content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("isbn;title;lang\n"), ImportFormat::Delimited);
        assert_eq!(detect_format("978-1\nTitle\n"), ImportFormat::Vertical);
        assert_eq!(detect_format(""), ImportFormat::Vertical);
    }

    #[test]
    fn test_only_first_line_decides() {
        assert_eq!(
            detect_format("978-1\nA;title;with;delimiters\n"),
            ImportFormat::Vertical
        );
    }

    #[test]
    fn test_merge_skips_existing_and_repeated_ids() {
        let mut catalog = Catalog::default();
        catalog.add(Book::new("1", "Existing"));

        let added = merge(
            &mut catalog,
            vec![
                Book::new("1", "Duplicate"),
                Book::new("2", "New"),
                Book::new("2", "Repeated in file"),
            ],
        );

        assert_eq!(added, 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.books[0].title, "Existing");
        assert_eq!(catalog.books[1].title, "New");
    }

    #[test]
    fn test_import_str_picks_decoder() {
        let mut catalog = Catalog::default();
        let delimited = "isbn;titre;langue;auteurs;date;genre;description\n\
                         1;Dune;English;Frank Herbert;01/08/1965;SF;Spice\n";
        assert_eq!(import_str(&mut catalog, delimited), 1);

        let vertical = "2\nEmma\nEnglish\nJane Austen\n23/12/1815\nA matchmaker\nNovel\n";
        assert_eq!(import_str(&mut catalog, vertical), 1);
        assert_eq!(catalog.books[1].genre, "Novel");
    }
}
