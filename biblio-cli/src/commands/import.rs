//! Import command implementation

use super::open_catalog;
use anyhow::{Context, Result};
use biblio_core::{import, CatalogStore};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Import a file into the catalog and save it
pub fn import(store: &CatalogStore, file: &Path) -> Result<()> {
    let mut catalog = open_catalog(store)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message(format!("Importing {}...", file.display()));
    let added = import::import_file(&mut catalog, file)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    pb.set_message("Saving catalog...");
    store
        .save(&catalog)
        .with_context(|| format!("Failed to save catalog {}", store.path().display()))?;

    pb.finish_and_clear();
    tracing::info!(added, total = catalog.len(), "Import finished");
    println!(
        "Imported {} book(s) from {} ({} in catalog)",
        added,
        file.display(),
        catalog.len()
    );

    Ok(())
}
