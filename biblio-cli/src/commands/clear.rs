//! Clear command implementation

use super::open_catalog;
use anyhow::{bail, Context, Result};
use biblio_core::CatalogStore;

/// Delete every book and save the empty catalog
pub fn clear(store: &CatalogStore, yes: bool) -> Result<()> {
    if !yes {
        bail!("Refusing to delete every book without --yes");
    }

    let mut catalog = open_catalog(store)?;
    let removed = catalog.len();

    store
        .clear(&mut catalog)
        .with_context(|| format!("Failed to save catalog {}", store.path().display()))?;

    println!("Deleted {} book(s) from {}", removed, store.path().display());
    Ok(())
}
