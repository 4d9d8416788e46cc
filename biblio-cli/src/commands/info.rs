//! Info command implementation

use super::open_catalog;
use anyhow::Result;
use biblio_core::CatalogStore;
use serde::Serialize;

/// Catalog info output
#[derive(Serialize)]
struct CatalogInfo {
    name: String,
    description: String,
    books: usize,
    path: String,
}

/// Display information about the catalog
pub fn info(store: &CatalogStore, json: bool) -> Result<()> {
    let catalog = open_catalog(store)?;

    let info = CatalogInfo {
        books: catalog.len(),
        name: catalog.name,
        description: catalog.description,
        path: store.path().display().to_string(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Name:        {}", info.name);
        println!("Description: {}", info.description);
        println!("Books:       {}", info.books);
        println!("File:        {}", info.path);
    }

    Ok(())
}
