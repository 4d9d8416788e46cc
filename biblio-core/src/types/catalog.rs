//! The Catalog - a named, ordered collection of books

use super::Book;
use serde::{Deserialize, Serialize};

/// Name given to a catalog when none is stored
pub const DEFAULT_NAME: &str = "My Library";

/// Description given to a catalog when none is stored
pub const DEFAULT_DESCRIPTION: &str = "Personal book catalog";

/// A named collection of books in insertion order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Catalog name, shown as the page title on export
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Books in display/storage order
    pub books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            books: Vec::new(),
        }
    }

    /// Whether a book with exactly this identifier is already present
    pub fn exists_by_id(&self, id: &str) -> bool {
        self.books.iter().any(|b| b.id == id)
    }

    /// Look up a book by identifier
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append a book. Uniqueness is the caller's responsibility.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_DESCRIPTION)
    }
}
