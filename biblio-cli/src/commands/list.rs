//! List command implementation

use super::{open_catalog, print_books, BookList};
use anyhow::{bail, Result};
use biblio_core::{AppConfig, CatalogStore, Listing, Pager};

/// Print one page of the catalog
pub fn list(store: &CatalogStore, config: &AppConfig, page: usize, json: bool) -> Result<()> {
    let catalog = open_catalog(store)?;
    let mut pager = Pager::new(&catalog.books, config.page_size);

    if !catalog.is_empty() && pager.go_to(page - 1).is_err() {
        bail!(
            "Page {} does not exist (the catalog has {} pages)",
            page,
            pager.page_count()
        );
    }

    let listing = pager.listing();

    if json {
        let books = match &listing {
            Listing::Empty => &[][..],
            Listing::Page(p) => p.books,
        };
        let output = BookList {
            total: pager.total(),
            books,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", catalog.name);
    println!("Books: {}", pager.total());

    match listing {
        Listing::Empty => println!("No books in this catalog yet."),
        Listing::Page(p) => {
            print_books(p.books, p.first_number);
            println!("Page {} / {}", p.index + 1, p.count);
        }
    }

    Ok(())
}
