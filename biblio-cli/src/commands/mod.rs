//! CLI command implementations

mod clear;
mod export;
mod import;
mod info;
mod list;
mod search;

pub use clear::clear;
pub use export::export;
pub use import::import;
pub use info::info;
pub use list::list;
pub use search::search;

use anyhow::{Context, Result};
use biblio_core::{AppConfig, Book, Catalog, CatalogStore};
use serde::Serialize;
use std::path::Path;

/// Load the catalog, starting from an empty one when the file does not exist yet
fn open_catalog(store: &CatalogStore) -> Result<Catalog> {
    match store.load() {
        Ok(catalog) => Ok(catalog),
        Err(e) if e.is_not_found() => {
            tracing::info!("No catalog at {}, using an empty one", store.path().display());
            Ok(Catalog::default())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to load catalog {}", store.path().display()))
        }
    }
}

/// Settings for non-interactive commands; never written back
pub fn read_config(path: &Path) -> AppConfig {
    AppConfig::load(path).unwrap_or_else(|e| {
        tracing::debug!("Using default settings: {}", e);
        AppConfig::default()
    })
}

/// Book list output
#[derive(Serialize)]
struct BookList<'a> {
    total: usize,
    books: &'a [Book],
}

/// Print books as numbered lines, starting at `first_number`
fn print_books(books: &[Book], first_number: usize) {
    for (offset, book) in books.iter().enumerate() {
        println!("{:>3}. {} by {}", first_number + offset, book.title, book.authors);
        println!(
            "     ISBN: {} | Genre: {} | Published: {}",
            book.id, book.genre, book.date
        );
    }
}
