//! Error types for Biblio Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using BiblioError
pub type Result<T> = std::result::Result<T, BiblioError>;

/// Top-level error type for all Biblio operations
#[derive(Debug, Error)]
pub enum BiblioError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while parsing records, dates and settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed record: expected at least {expected} fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },

    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Invalid page size '{0}', expected a positive integer")]
    InvalidPageSize(String),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Whether this error means the file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

/// Errors that occur while exporting a catalog
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Writing export failed: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Page or record requests outside the current listing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Already on the last page")]
    PastLastPage,

    #[error("Already on the first page")]
    BeforeFirstPage,

    #[error("No record numbered {0}")]
    NoSuchRecord(usize),

    #[error("The listing is empty")]
    Empty,
}
