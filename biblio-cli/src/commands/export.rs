//! Export command implementation

use super::open_catalog;
use anyhow::{Context, Result};
use biblio_core::export::{encoder_for_format, export_file};
use biblio_core::CatalogStore;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Export the catalog to a file
pub fn export(store: &CatalogStore, output: Option<&Path>, format: &str) -> Result<()> {
    let encoder = encoder_for_format(format)
        .with_context(|| format!("No encoder available for {} format", format))?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("catalogue.{}", encoder.file_extension())));

    let catalog = open_catalog(store)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Writing {}...", encoder.format_name()));

    export_file(&catalog, encoder.as_ref(), &output)
        .with_context(|| format!("Failed to export to {}", output.display()))?;

    pb.finish_and_clear();
    println!(
        "Exported {} book(s) as {} -> {}",
        catalog.len(),
        encoder.format_name(),
        output.display()
    );

    Ok(())
}
