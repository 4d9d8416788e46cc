//! Unsaved-changes tracking for an interactive session

/// State carried between shell handlers
///
/// Handlers take the session by value and hand back the updated one, so every
/// change to the unsaved flag is visible at the call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    dirty: bool,
}

impl Session {
    /// A session with nothing to save
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog has changes that were not saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The catalog was changed in memory
    #[must_use]
    pub fn modified(self) -> Self {
        Self { dirty: true }
    }

    /// The catalog was written to disk
    #[must_use]
    pub fn saved(self) -> Self {
        Self { dirty: false }
    }
}
