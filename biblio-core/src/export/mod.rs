//! Encoders for writing a catalog to output formats

mod delimited;
mod html;

pub use delimited::DelimitedEncoder;
pub use html::{render_index_bar, HtmlEncoder};

use crate::error::ExportError;
use crate::types::Catalog;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Trait for encoding a catalog to an output format
pub trait CatalogEncoder {
    /// Encode a catalog to a writer
    fn encode(&self, catalog: &Catalog, writer: &mut dyn Write) -> Result<(), ExportError>;

    /// Format name (e.g., "HTML")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;
}

/// Get an encoder by format name
pub fn encoder_for_format(format: &str) -> Option<Box<dyn CatalogEncoder>> {
    match format.to_lowercase().as_str() {
        "html" | "htm" => Some(Box::new(HtmlEncoder::new())),
        "csv" | "txt" => Some(Box::new(DelimitedEncoder::new())),
        _ => None,
    }
}

/// Encode a catalog into a file, replacing it
pub fn export_file(
    catalog: &Catalog,
    encoder: &dyn CatalogEncoder,
    path: &Path,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encoder.encode(catalog, &mut writer)?;
    writer.flush()?;

    tracing::debug!(
        books = catalog.books.len(),
        "Exported {} to {}",
        encoder.format_name(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_lookup() {
        assert_eq!(encoder_for_format("HTML").unwrap().file_extension(), "html");
        assert_eq!(encoder_for_format("csv").unwrap().format_name(), "CSV");
        assert!(encoder_for_format("pdf").is_none());
    }
}
