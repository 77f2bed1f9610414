// src/store/mod.rs

//! Recipe storage
//!
//! A store maps recipe titles to documents. Each record is addressed by a
//! [`RecipeHandle`] (its file name) that [`RecipeStore::list`] hands out and
//! the other operations consume.
//!
//! # Record Lifecycle
//!
//! ```text
//! NonExistent --write--> Persisted --write (same identity)--> Persisted
//!                            |
//!                            +--replace (new identity)--> Persisted(new) + NonExistent(old)
//!                            |
//!                            +--delete--> NonExistent
//! ```
//!
//! Writes never leave a partially written document behind, and a rename
//! writes the new record before the old one is removed.

mod disk;
mod memory;

pub use disk::{FsStore, DEFAULT_STORAGE_DIR};
pub use memory::MemoryStore;

use crate::error::Result;
use std::fmt;
use tracing::{debug, warn};

/// Opaque reference to a stored recipe
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeHandle(String);

impl RecipeHandle {
    pub(crate) fn new(file_name: impl Into<String>) -> Self {
        Self(file_name.into())
    }

    /// Handle of the record a title maps to, whether or not it exists yet
    pub fn for_title(title: &str) -> Self {
        Self(crate::recipe::file_name_for(title))
    }

    /// File name of the record
    pub fn file_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One listed recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeEntry {
    /// File name without the `recipe_` prefix and extension
    pub name: String,
    pub handle: RecipeHandle,
}

impl RecipeEntry {
    /// Build an entry from a file name, or `None` if it is not a recipe file
    pub(crate) fn from_file_name(file_name: &str) -> Option<Self> {
        let name = crate::recipe::display_name(file_name)?;
        Some(Self {
            name: name.to_string(),
            handle: RecipeHandle::new(file_name),
        })
    }
}

/// Sort entries by display name, then file name
pub(crate) fn sort_entries(entries: &mut [RecipeEntry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.handle.cmp(&b.handle)));
}

/// Storage capabilities used by the shell
pub trait RecipeStore {
    /// All stored recipes, sorted by display name
    fn list(&self) -> Result<Vec<RecipeEntry>>;

    /// Raw stored text of a recipe
    ///
    /// Fails with `Error::NotFound` if the record no longer exists.
    fn read(&self, handle: &RecipeHandle) -> Result<String>;

    /// Store `text` as the record for `title`, replacing any record with the same identity
    fn write(&self, title: &str, text: &str) -> Result<RecipeHandle>;

    /// Remove a record, returning whether it was removed
    fn delete(&self, handle: &RecipeHandle) -> bool;

    /// Whether two handles address the same record
    fn same_record(&self, a: &RecipeHandle, b: &RecipeHandle) -> bool {
        a == b
    }

    /// Save an edited recipe that was loaded from `old`
    ///
    /// The new record is written first. The old record is removed only
    /// after that succeeds, and only when the title change moved the recipe
    /// to a different record.
    fn replace(&self, old: &RecipeHandle, title: &str, text: &str) -> Result<RecipeHandle> {
        let new = self.write(title, text)?;

        if self.same_record(old, &new) {
            return Ok(new);
        }

        debug!("Recipe renamed: {} -> {}", old, new);
        if !self.delete(old) {
            warn!("Renamed recipe saved as {} but {} could not be removed", new, old);
        }
        Ok(new)
    }
}
