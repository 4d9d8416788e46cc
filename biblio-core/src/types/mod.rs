//! Core types for the book catalog

mod book;
mod catalog;

pub use book::Book;
pub use catalog::{Catalog, DEFAULT_DESCRIPTION, DEFAULT_NAME};
