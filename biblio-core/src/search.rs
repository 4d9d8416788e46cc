//! Filtering books by identifier or title

use crate::types::Book;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a query is matched against books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Case-sensitive equality with the identifier
    ExactId,
    /// Case-insensitive substring of the title
    Title,
    /// Identifier contains `-query-`, e.g. a publisher code inside an ISBN
    IdFragment,
}

impl SearchMode {
    /// Whether a book matches the query under this mode
    pub fn matches(&self, book: &Book, query: &str) -> bool {
        match self {
            SearchMode::ExactId => book.id == query,
            SearchMode::Title => book.title.to_lowercase().contains(&query.to_lowercase()),
            SearchMode::IdFragment => book.id.contains(&format!("-{}-", query)),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "isbn" | "id" => Ok(SearchMode::ExactId),
            "title" => Ok(SearchMode::Title),
            "publisher" | "fragment" => Ok(SearchMode::IdFragment),
            other => Err(format!(
                "unknown search mode '{}' (expected isbn, title or publisher)",
                other
            )),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::ExactId => "isbn",
            SearchMode::Title => "title",
            SearchMode::IdFragment => "publisher",
        };
        f.write_str(name)
    }
}

/// Books matching the query, in their original order
pub fn search(books: &[Book], mode: SearchMode, query: &str) -> Vec<Book> {
    match mode {
        SearchMode::Title => {
            let needle = query.to_lowercase();
            books
                .iter()
                .filter(|b| b.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        _ => books
            .iter()
            .filter(|b| mode.matches(b, query))
            .cloned()
            .collect(),
    }
}
