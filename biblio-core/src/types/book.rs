//! The Book record - one catalog entry

use serde::{Deserialize, Serialize};

/// A single catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, conventionally an ISBN-13 such as `978-2-07-040850-4`
    pub id: String,

    /// Book title
    pub title: String,

    /// Language the edition is written in
    pub language: String,

    /// Authors, comma-joined when there are several
    pub authors: String,

    /// Publication date, `DD/MM/YYYY` or free text
    pub date: String,

    /// Literary genre
    pub genre: String,

    /// Summary (may span several lines before it is stored)
    pub description: String,
}

impl Book {
    /// Create a book with an identifier and a title, all other fields empty
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set authors from a single string
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    /// Set authors from separate entries, joined with ", "
    pub fn with_author_list<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.authors = authors
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self
    }

    /// Set publication date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
