//! Single-line record codec
//!
//! A book is stored as its seven fields joined by [`DELIMITER`], in the order
//! id, title, language, authors, date, genre, description. Fields are sanitized
//! on the way out so that a stored line never contains an extra delimiter or a
//! line break.

use crate::error::ParseError;
use crate::types::Book;

/// Field separator used by catalog files and delimited imports
pub const DELIMITER: char = ';';

/// Replacement for a delimiter found inside a field
pub const SUBSTITUTE: char = ',';

/// Fields a line must carry to be a record (description is optional)
pub const MIN_FIELDS: usize = 6;

/// Make a field safe to store on one delimited line
pub fn sanitize(field: &str) -> String {
    field
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            DELIMITER => SUBSTITUTE,
            '\n' => ' ',
            other => other,
        })
        .collect()
}

/// Split a line on the delimiter, keeping empty tokens (including a trailing one)
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// Encode a book as one delimited line (without line terminator)
pub fn encode(book: &Book) -> String {
    [
        &book.id,
        &book.title,
        &book.language,
        &book.authors,
        &book.date,
        &book.genre,
        &book.description,
    ]
    .iter()
    .map(|field| sanitize(field))
    .collect::<Vec<_>>()
    .join(&DELIMITER.to_string())
}

/// Decode a delimited line into a book
///
/// Tokens past the seventh are ignored.
pub fn decode(line: &str) -> Result<Book, ParseError> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::MalformedRecord {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    Ok(Book {
        id: fields[0].to_string(),
        title: fields[1].to_string(),
        language: fields[2].to_string(),
        authors: fields[3].to_string(),
        date: fields[4].to_string(),
        genre: fields[5].to_string(),
        description: fields.get(6).map(|s| s.to_string()).unwrap_or_default(),
    })
}
