//! Adding, importing and deleting books

use super::{header, parse_choice, read_block, report_error, rule};
use crate::console::{Console, Style};
use biblio_core::date::parse_date;
use biblio_core::{import, AppConfig, Book, Catalog, CatalogStore, Session};
use std::path::Path;

/// The book management menu
pub fn manage<C: Console>(
    console: &mut C,
    config: &AppConfig,
    store: &CatalogStore,
    catalog: &mut Catalog,
    mut session: Session,
) -> Session {
    loop {
        header(console, config, "MANAGE BOOKS");
        console.print(Style::Emphasis, "[1] Add a book manually");
        console.print(Style::Emphasis, "[2] Import from a file");
        console.print(Style::Emphasis, "[3] Delete all books");
        console.print(Style::Emphasis, "[4] Back to main menu");
        rule(console);

        let Some(input) = console.prompt("> Your choice: ") else {
            return session;
        };

        session = match parse_choice(&input) {
            Some(1) => add_book(console, config, catalog, session),
            Some(2) => import_books(console, config, catalog, session),
            Some(3) => clear_books(console, config, store, catalog, session),
            Some(4) => return session,
            _ => {
                console.print(Style::Warn, "Invalid choice.");
                console.pause();
                session
            }
        };
    }
}

/// Ask for every field of a new book and append it to the catalog
pub fn add_book<C: Console>(
    console: &mut C,
    config: &AppConfig,
    catalog: &mut Catalog,
    session: Session,
) -> Session {
    header(console, config, "ADD A BOOK");

    let Some(id) = console.prompt("ISBN: ").map(|s| s.trim().to_string()) else {
        return session;
    };
    if id.is_empty() {
        console.print(Style::Warn, "(!) The ISBN cannot be empty.");
        console.pause();
        return session;
    }
    if catalog.exists_by_id(&id) {
        console.print(Style::Error, "(x) A book with this ISBN already exists.");
        console.pause();
        return session;
    }

    let Some(title) = console.prompt("Title: ") else {
        return session;
    };
    let Some(language) = console.prompt("Language: ") else {
        return session;
    };

    console.print(Style::Plain, "Authors, one per line (blank line to finish):");
    let authors = read_block(console, "  > ");

    let date = loop {
        let Some(input) = console.prompt("Publication date (DD/MM/YYYY): ") else {
            return session;
        };
        let input = input.trim();
        match parse_date(input) {
            Ok(_) => break input.to_string(),
            Err(e) => console.print(Style::Warn, &format!("(!) {}", e)),
        }
    };

    let Some(genre) = console.prompt("Genre: ") else {
        return session;
    };

    console.print(Style::Plain, "Description (blank line to finish):");
    let description = read_block(console, "  > ").join("\n");

    let book = Book::new(id, title)
        .with_language(language)
        .with_author_list(authors)
        .with_date(date)
        .with_genre(genre)
        .with_description(description);

    tracing::debug!(id = %book.id, "Added book '{}'", book.title);
    catalog.add(book);

    console.print(
        Style::Success,
        "(v) Book added. Remember to save before quitting.",
    );
    console.pause();
    session.modified()
}

/// Merge the books of a file into the catalog
pub fn import_books<C: Console>(
    console: &mut C,
    config: &AppConfig,
    catalog: &mut Catalog,
    session: Session,
) -> Session {
    header(console, config, "IMPORT");
    console.print(
        Style::Muted,
        "Accepts a ';'-delimited file with a header line, or one field per line.",
    );

    let Some(path) = console.prompt("File path: ") else {
        return session;
    };
    let path = path.trim();

    let session = match import::import_file(catalog, Path::new(path)) {
        Ok(0) => {
            console.print(Style::Warn, "No new books found in this file.");
            session
        }
        Ok(added) => {
            console.print(
                Style::Success,
                &format!("(v) Done! {} book(s) imported. Remember to save.", added),
            );
            session.modified()
        }
        Err(e) => {
            report_error(console, "Could not import the file", &e);
            session
        }
    };
    console.pause();
    session
}

/// Delete every book after confirmation; the empty catalog is saved at once
pub fn clear_books<C: Console>(
    console: &mut C,
    config: &AppConfig,
    store: &CatalogStore,
    catalog: &mut Catalog,
    session: Session,
) -> Session {
    header(console, config, "DELETE ALL BOOKS");
    console.print(
        Style::Warn,
        &format!("(!) This removes all {} book(s) for good.", catalog.len()),
    );

    let confirmed = console
        .prompt("Are you sure? (y/N): ")
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false);

    let session = if !confirmed {
        console.print(Style::Plain, "Cancelled.");
        session
    } else {
        match store.clear(catalog) {
            Ok(()) => {
                console.print(Style::Success, "(v) The catalog is now empty.");
                session.saved()
            }
            Err(e) => {
                report_error(console, "Could not save the empty catalog", &e);
                session.modified()
            }
        }
    };
    console.pause();
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use crate::console::ScriptedConsole;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new("Home", "Shelf");
        catalog.add(Book::new("978-0-261-10221-7", "The Hobbit"));
        catalog
    }

    #[test]
    fn test_add_book() {
        let mut catalog = catalog();
        let mut console = ScriptedConsole::new([
            "978-2-07-036822-8",
            "L'Étranger",
            "fr",
            "Albert Camus",
            "",
            "31/02/1942",
            "19/05/1942",
            "Roman",
            "Meursault.",
            "Alger.",
            "",
            "",
        ]);
        let session = add_book(&mut console, &AppConfig::default(), &mut catalog, Session::new());

        assert!(session.is_dirty());
        assert_eq!(catalog.len(), 2);
        let book = &catalog.books[1];
        assert_eq!(book.authors, "Albert Camus");
        assert_eq!(book.date, "19/05/1942");
        assert_eq!(book.genre, "Roman");
        assert_eq!(book.description, "Meursault.\nAlger.");
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_add_joins_authors() {
        let mut catalog = catalog();
        let mut console = ScriptedConsole::new([
            "id-2", "Good Omens", "en", "Terry Pratchett", "Neil Gaiman", "", "01/05/1990",
            "Fantasy", "", "",
        ]);
        add_book(&mut console, &AppConfig::default(), &mut catalog, Session::new());

        assert_eq!(catalog.books[1].authors, "Terry Pratchett, Neil Gaiman");
        assert_eq!(catalog.books[1].description, "");
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = catalog();
        let mut console = ScriptedConsole::new(["978-0-261-10221-7", ""]);
        let session = add_book(&mut console, &AppConfig::default(), &mut catalog, Session::new());

        assert!(!session.is_dirty());
        assert_eq!(catalog.len(), 1);
        assert!(console.output.contains("already exists"));
    }

    #[test]
    fn test_import_marks_session() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("books.csv");
        std::fs::write(
            &file,
            "isbn;title;language;authors;date;genre;description\n\
             978-0-261-10221-7;The Hobbit;en;J.R.R. Tolkien;21/09/1937;Fantasy;\n\
             978-2-07-036822-8;L'Étranger;fr;Albert Camus;19/05/1942;Roman;\"Meursault.\"\n",
        )
        .unwrap();

        let mut catalog = catalog();
        let mut console = ScriptedConsole::new([file.to_str().unwrap(), ""]);
        let session = import_books(&mut console, &AppConfig::default(), &mut catalog, Session::new());

        assert!(session.is_dirty());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.books[1].description, "Meursault.");
        assert!(console.output.contains("1 book(s) imported"));
    }

    #[test]
    fn test_import_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        let mut catalog = catalog();
        let mut console = ScriptedConsole::new([missing.to_str().unwrap(), ""]);
        let session = import_books(&mut console, &AppConfig::default(), &mut catalog, Session::new());

        assert!(!session.is_dirty());
        assert!(console.output.contains("Could not import the file"));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("library.db"));
        let mut catalog = catalog();

        let mut console = ScriptedConsole::new(["n", ""]);
        clear_books(&mut console, &AppConfig::default(), &store, &mut catalog, Session::new());
        assert_eq!(catalog.len(), 1);
        assert!(!store.path().exists());

        let mut console = ScriptedConsole::new(["y", ""]);
        let session = clear_books(
            &mut console,
            &AppConfig::default(),
            &store,
            &mut catalog,
            Session::new().modified(),
        );
        assert!(catalog.is_empty());
        assert!(!session.is_dirty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_menu_back() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("library.db"));
        let mut catalog = catalog();
        let mut console = ScriptedConsole::new(["x", "", "4"]);
        let session = manage(&mut console, &AppConfig::default(), &store, &mut catalog, Session::new());

        assert!(!session.is_dirty());
        assert!(console.output.contains("Invalid choice."));
        assert_eq!(console.remaining(), 0);
    }
}
