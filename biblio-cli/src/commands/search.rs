//! Search command implementation

use super::{open_catalog, print_books, BookList};
use anyhow::Result;
use biblio_core::{CatalogStore, SearchMode};

/// Print the books matching a query
pub fn search(store: &CatalogStore, mode: SearchMode, query: &str, json: bool) -> Result<()> {
    let catalog = open_catalog(store)?;
    let results = biblio_core::search::search(&catalog.books, mode, query);

    tracing::debug!(mode = %mode, matches = results.len(), "Searched for '{}'", query);

    if json {
        let output = BookList {
            total: results.len(),
            books: &results,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if results.is_empty() {
        println!("No results found.");
    } else {
        print_books(&results, 1);
        println!("{} result(s)", results.len());
    }

    Ok(())
}
