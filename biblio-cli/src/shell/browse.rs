//! Paged book list and detail screen

use super::{header, rule};
use crate::console::{Console, Style};
use biblio_core::{AppConfig, Book, Catalog, Listing, Pager};

/// Browse `books` page by page until the user goes back
///
/// When `catalog` is given its name and description head every page.
pub fn show_list<C: Console>(
    console: &mut C,
    config: &AppConfig,
    catalog: Option<&Catalog>,
    books: &[Book],
    title: &str,
) {
    let mut pager = Pager::new(books, config.page_size);

    loop {
        header(console, config, title);
        if let Some(catalog) = catalog {
            console.print(Style::Emphasis, &catalog.name);
            console.print(Style::Muted, &catalog.description);
        }
        console.print(Style::Plain, &format!("Books: {}", pager.total()));
        rule(console);

        let page = match pager.listing() {
            Listing::Empty => {
                console.print(Style::Muted, "(o_o) No books to show here yet.");
                console.pause();
                return;
            }
            Listing::Page(page) => page,
        };

        for (offset, book) in page.books.iter().enumerate() {
            console.print(
                Style::Emphasis,
                &format!("{:>3}. {}", page.first_number + offset, book.title),
            );
            console.print(
                Style::Muted,
                &format!(
                    "     by {} | ISBN: {} | Genre: {} | Published: {}",
                    book.authors, book.id, book.genre, book.date
                ),
            );
        }

        rule(console);
        console.print(
            Style::Plain,
            &format!("Page {} / {}", page.index + 1, page.count),
        );
        if page.has_previous() {
            console.print(Style::Emphasis, "[P] Previous page");
        }
        if page.has_next() {
            console.print(Style::Emphasis, "[N] Next page");
        }
        console.print(Style::Emphasis, "[number] Show details");
        console.print(Style::Emphasis, "[Q] Back");

        let Some(input) = console.prompt("> Your choice: ") else {
            return;
        };

        let moved = match input.trim().to_lowercase().as_str() {
            "q" => return,
            "n" => pager.next(),
            "p" => pager.previous(),
            other => match other.parse::<usize>() {
                Ok(number) => pager.select(number).map(|book| show_details(console, config, book)),
                Err(_) => {
                    console.print(Style::Warn, "Invalid choice.");
                    console.pause();
                    Ok(())
                }
            },
        };

        if let Err(e) = moved {
            tracing::debug!("Navigation refused: {}", e);
            console.print(Style::Warn, &format!("(!) {}", e));
            console.pause();
        }
    }
}

/// Every field of one book
pub fn show_details<C: Console>(console: &mut C, config: &AppConfig, book: &Book) {
    header(console, config, "BOOK DETAILS");
    console.print(Style::Emphasis, &book.title);
    rule(console);

    let fields = [
        ("Author(s)", &book.authors),
        ("Genre", &book.genre),
        ("Published", &book.date),
        ("Language", &book.language),
        ("ISBN", &book.id),
    ];
    for (label, value) in fields {
        console.print(Style::Plain, &format!("{:<10}: {}", label, value));
    }

    rule(console);
    console.print(Style::Emphasis, "Description:");
    if book.description.is_empty() {
        console.print(Style::Muted, "(none)");
    } else {
        for line in book.description.lines() {
            console.print(Style::Plain, line);
        }
    }
    console.print(Style::Plain, "");
    console.pause();
}
