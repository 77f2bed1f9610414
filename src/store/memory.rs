// src/store/memory.rs

//! In-memory recipe store
//!
//! Follows the same naming and listing rules as [`super::FsStore`] without
//! touching the disk. Used to drive the shell in tests.

use super::{sort_entries, RecipeEntry, RecipeHandle, RecipeStore};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Recipe store holding documents in a map keyed by file name
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place raw text under an arbitrary file name
    ///
    /// Bypasses title mapping, for seeding stores with foreign or broken files.
    pub fn insert_raw(&self, file_name: impl Into<String>, text: impl Into<String>) {
        self.files.borrow_mut().insert(file_name.into(), text.into());
    }

    /// Stored file names, in order
    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    /// Raw text stored under a file name
    pub fn get_raw(&self, file_name: &str) -> Option<String> {
        self.files.borrow().get(file_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl RecipeStore for MemoryStore {
    fn list(&self) -> Result<Vec<RecipeEntry>> {
        let mut entries: Vec<RecipeEntry> = self
            .files
            .borrow()
            .keys()
            .filter_map(|name| RecipeEntry::from_file_name(name))
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }

    fn read(&self, handle: &RecipeHandle) -> Result<String> {
        self.files
            .borrow()
            .get(handle.file_name())
            .cloned()
            .ok_or_else(|| Error::NotFound(handle.to_string()))
    }

    fn write(&self, title: &str, text: &str) -> Result<RecipeHandle> {
        let handle = RecipeHandle::for_title(title);
        self.files
            .borrow_mut()
            .insert(handle.file_name().to_string(), text.to_string());
        Ok(handle)
    }

    fn delete(&self, handle: &RecipeHandle) -> bool {
        self.files.borrow_mut().remove(handle.file_name()).is_some()
    }
}
