//! Biblio Core Library
//!
//! This crate provides the catalog model and the file formats of the Biblio
//! personal book catalog: the flat-file store, delimited and legacy imports,
//! HTML/CSV exports, title sort keys, paging and search.
//! It performs no terminal I/O; the CLI drives it.

pub mod codec;
pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod import;
pub mod index;
pub mod pager;
pub mod search;
pub mod session;
pub mod storage;
pub mod types;

pub use config::AppConfig;
pub use error::{BiblioError, ExportError, NavigationError, ParseError, Result, StorageError};
pub use pager::{Listing, Page, Pager};
pub use search::SearchMode;
pub use session::Session;
pub use storage::CatalogStore;
pub use types::{Book, Catalog};
