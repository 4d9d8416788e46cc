//! Title sort keys and alphabetical sections
//!
//! Titles are ordered by a key that ignores a leading French article or
//! elision, so "Le Petit Prince" files under P.

use crate::types::Book;
use std::cmp::Ordering;

/// Leading words stripped from an uppercased title, tried in this order
pub const ELIDED_PREFIXES: [&str; 11] = [
    "LE ", "LA ", "L'", "LES ", "UN ", "UNE ", "DES ", "D'", "J'", "QU'", "S'",
];

/// Section used for keys that do not start with a letter A-Z
pub const OTHER_SECTION: char = '#';

/// Every section in display order: `#`, then `A` to `Z`
pub fn sections() -> impl Iterator<Item = char> {
    std::iter::once(OTHER_SECTION).chain('A'..='Z')
}

/// Normalized key for ordering a title
///
/// Only the first matching prefix is removed.
pub fn sort_key(title: &str) -> String {
    let upper = title.to_uppercase();
    for prefix in ELIDED_PREFIXES {
        if let Some(rest) = upper.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    upper
}

/// Section a sort key belongs to
pub fn section_of(key: &str) -> char {
    match key.chars().next() {
        Some(c) if c.is_ascii_uppercase() => c,
        _ => OTHER_SECTION,
    }
}

/// Order two books by the sort keys of their titles
pub fn compare(a: &Book, b: &Book) -> Ordering {
    sort_key(&a.title).cmp(&sort_key(&b.title))
}

/// A sorted copy of the books; the input order is left untouched
pub fn sorted(books: &[Book]) -> Vec<Book> {
    let mut keyed: Vec<(String, Book)> = books
        .iter()
        .map(|b| (sort_key(&b.title), b.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, book)| book).collect()
}

/// Sorted books grouped by section, in section order, empty sections omitted
pub fn group_by_section(books: &[Book]) -> Vec<(char, Vec<Book>)> {
    let sorted = sorted(books);
    sections()
        .filter_map(|section| {
            let members: Vec<Book> = sorted
                .iter()
                .filter(|b| section_of(&sort_key(&b.title)) == section)
                .cloned()
                .collect();
            (!members.is_empty()).then_some((section, members))
        })
        .collect()
}
