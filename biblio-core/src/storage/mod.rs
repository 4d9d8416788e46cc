//! Flat-file catalog storage
//!
//! Layout of a catalog file:
//!
//! ```text
//! line 1     catalog name
//! line 2     catalog description
//! line 3..N  one encoded book per line (see [`crate::codec`])
//! ```

use crate::codec;
use crate::error::StorageError;
use crate::types::{Catalog, DEFAULT_DESCRIPTION, DEFAULT_NAME};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// A catalog file at a fixed location
///
/// The path given to [`CatalogStore::new`] is the canonical location used by
/// [`CatalogStore::clear`].
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, or `StorageError::NotFound` if the file cannot be read
    pub fn load(&self) -> StorageResult<Catalog> {
        load_catalog(&self.path)
    }

    /// Overwrite the catalog file with the given catalog
    pub fn save(&self, catalog: &Catalog) -> StorageResult<()> {
        save_catalog(catalog, &self.path)
    }

    /// Remove every book and persist the empty catalog right away
    ///
    /// The in-memory catalog is emptied even if the write fails.
    pub fn clear(&self, catalog: &mut Catalog) -> StorageResult<()> {
        let removed = catalog.books.len();
        catalog.books.clear();
        tracing::info!(removed, path = %self.path.display(), "Cleared catalog");
        self.save(catalog)
    }
}

/// Read a catalog file
pub fn load_catalog(path: &Path) -> StorageResult<Catalog> {
    let bytes = fs::read(path).map_err(|e| {
        tracing::debug!("Cannot read {}: {}", path.display(), e);
        StorageError::NotFound(path.to_path_buf())
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let catalog = parse_catalog(&content);

    tracing::debug!(
        books = catalog.books.len(),
        "Loaded catalog '{}' from {}",
        catalog.name,
        path.display()
    );
    Ok(catalog)
}

/// Write a catalog file, replacing any previous content
///
/// The content goes to a sibling temporary file first and is then renamed
/// over the destination.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> StorageResult<()> {
    write_file(path, &render_catalog(catalog))?;
    tracing::debug!(
        books = catalog.books.len(),
        "Saved catalog to {}",
        path.display()
    );
    Ok(())
}

/// Parse the text of a catalog file. Malformed record lines are skipped.
pub fn parse_catalog(content: &str) -> Catalog {
    let mut lines = content.lines();
    let name = lines.next().unwrap_or(DEFAULT_NAME).to_string();
    let description = lines.next().unwrap_or(DEFAULT_DESCRIPTION).to_string();
    let mut catalog = Catalog::new(name, description);

    let mut skipped = 0usize;
    for line in lines.filter(|l| !l.is_empty()) {
        match codec::decode(line) {
            Ok(book) => catalog.add(book),
            Err(e) => {
                skipped += 1;
                tracing::debug!("Skipping stored line: {}", e);
            }
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "Ignored malformed catalog lines");
    }

    catalog
}

/// Render a catalog in the on-disk format
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&codec::sanitize(&catalog.name));
    out.push('\n');
    out.push_str(&codec::sanitize(&catalog.description));
    out.push('\n');
    for book in &catalog.books {
        out.push_str(&codec::encode(book));
        out.push('\n');
    }
    out
}

/// Replace a file's content through a sibling temporary file
pub(crate) fn write_file(path: &Path, data: &str) -> StorageResult<()> {
    let write_failure = |source| StorageError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, data).map_err(write_failure)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_failure(e));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("catalog"));
    name.push(".tmp");
    path.with_file_name(name)
}
