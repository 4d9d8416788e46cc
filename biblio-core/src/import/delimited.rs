//! Delimited import: a header line followed by one record per line

use super::{ImportFormat, RecordDecoder};
use crate::codec;
use crate::types::Book;

/// Decoder for `;`-separated book lists
pub struct DelimitedDecoder {
    /// Whether the first line is a column header to discard
    has_header: bool,
}

impl DelimitedDecoder {
    pub fn new() -> Self {
        Self { has_header: true }
    }

    /// Treat the first line as data instead of a header
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }
}

impl Default for DelimitedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordDecoder for DelimitedDecoder {
    fn decode(&self, content: &str) -> Vec<Book> {
        let skip = usize::from(self.has_header);
        content
            .lines()
            .skip(skip)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match codec::decode(line) {
                Ok(book) => Some(book),
                Err(e) => {
                    tracing::debug!("Skipping import line: {}", e);
                    None
                }
            })
            .map(|mut book| {
                book.description = unquote(&book.description).to_string();
                book
            })
            .collect()
    }

    fn format(&self) -> ImportFormat {
        ImportFormat::Delimited
    }
}

/// Strip one pair of surrounding double quotes, if present
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}
