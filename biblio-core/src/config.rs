//! Persistent application settings
//!
//! The settings file holds the page size on its first line and the banner on
//! every following line:
//!
//! ```text
//! 10
//!        __...--~~~~~-._   _.-~~~~~--...__
//!      //               `V'               \\
//! ```

use crate::error::{BiblioError, ParseError, Result, StorageError};
use crate::storage::{self, StorageResult};
use std::fs;
use std::path::Path;

/// Books per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Banner shown above every screen until the user replaces it
pub const DEFAULT_BANNER: &str = r"       __...--~~~~~-._   _.-~~~~~--...__
     //               `V'               \\
    //                 |                 \\
   //__          BIBLIO CATALOG       __ \\
  //___\____________/ \/ \____________/___ \\
 //_________________________________________\\
";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Books shown per page, always positive
    pub page_size: usize,

    /// Banner text, opaque (may carry terminal styling)
    pub banner: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from a file
    ///
    /// Fails with `StorageError::NotFound` when the file cannot be read and
    /// with `ParseError::InvalidPageSize` when its first line is unusable.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| {
            tracing::debug!("Cannot read settings {}: {}", path.display(), e);
            BiblioError::Storage(StorageError::NotFound(path.to_path_buf()))
        })?;
        let config = parse_config(&String::from_utf8_lossy(&bytes))?;
        tracing::debug!(page_size = config.page_size, "Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Write settings to a file, replacing it
    pub fn save(&self, path: &Path) -> StorageResult<()> {
        storage::write_file(path, &render_config(self))?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Put the default banner back
    pub fn reset_banner(&mut self) {
        self.banner = DEFAULT_BANNER.to_string();
    }

    /// Replace the banner with the given lines, each newline-terminated
    pub fn set_banner_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.banner = lines
            .into_iter()
            .map(|line| format!("{}\n", line.as_ref()))
            .collect();
    }
}

/// Parse a positive page size
pub fn parse_page_size(input: &str) -> std::result::Result<usize, ParseError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidPageSize(input.trim().to_string())),
    }
}

/// Parse the text of a settings file
pub fn parse_config(content: &str) -> std::result::Result<AppConfig, ParseError> {
    let mut lines = content.lines();
    let page_size = parse_page_size(lines.next().unwrap_or_default())?;
    let banner = lines.map(|line| format!("{}\n", line)).collect();
    Ok(AppConfig { page_size, banner })
}

/// Render settings in the on-disk format
pub fn render_config(config: &AppConfig) -> String {
    let mut out = format!("{}\n{}", config.page_size, config.banner);
    if !config.banner.is_empty() && !config.banner.ends_with('\n') {
        out.push('\n');
    }
    out
}
