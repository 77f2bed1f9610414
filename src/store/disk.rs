// src/store/disk.rs

//! Directory-backed recipe store
//!
//! Every recipe is one JSON file directly inside the storage directory.
//! Files are written to a temporary file in the same directory, synced, and
//! renamed into place, so readers never observe a partial document.

use super::{sort_entries, RecipeEntry, RecipeHandle, RecipeStore};
use crate::error::{Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Storage directory used when none is configured, relative to the working directory
pub const DEFAULT_STORAGE_DIR: &str = "recipes";

/// Recipe store rooted at a directory
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `root`
    ///
    /// The directory does not need to exist; it is created by the first
    /// write. Fails if `root` exists and is not a directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if root.exists() && !root.is_dir() {
            return Err(Error::StorageRoot(root));
        }

        debug!("Opened recipe store at {:?}", root);
        Ok(Self { root })
    }

    /// Storage directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file behind a handle
    pub fn path_of(&self, handle: &RecipeHandle) -> PathBuf {
        self.root.join(handle.file_name())
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
            info!("Created recipe directory: {:?}", self.root);
        } else if !self.root.is_dir() {
            return Err(Error::StorageRoot(self.root.clone()));
        }
        Ok(())
    }
}

impl RecipeStore for FsStore {
    fn list(&self) -> Result<Vec<RecipeEntry>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            if !dir_entry.path().is_file() {
                continue;
            }

            let file_name = dir_entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                debug!("Skipping non-UTF8 file name in {:?}", self.root);
                continue;
            };

            if let Some(entry) = RecipeEntry::from_file_name(file_name) {
                entries.push(entry);
            }
        }

        sort_entries(&mut entries);
        Ok(entries)
    }

    fn read(&self, handle: &RecipeHandle) -> Result<String> {
        let path = self.path_of(handle);
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::NotFound(handle.to_string())
            } else {
                Error::Io(e)
            }
        })?;

        String::from_utf8(bytes).map_err(|e| {
            debug!("Recipe file {:?} is not UTF-8", path);
            Error::Encoding(e)
        })
    }

    fn write(&self, title: &str, text: &str) -> Result<RecipeHandle> {
        self.ensure_root()?;

        let handle = RecipeHandle::for_title(title);
        let path = self.path_of(&handle);

        let mut temp = NamedTempFile::new_in(&self.root)?;
        temp.write_all(text.as_bytes())?;
        temp.flush()?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        info!("Saved recipe to {:?} ({} bytes)", path, text.len());
        Ok(handle)
    }

    fn delete(&self, handle: &RecipeHandle) -> bool {
        let path = self.path_of(handle);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted recipe {:?}", path);
                true
            }
            Err(e) => {
                warn!("Failed to delete recipe {:?}: {}", path, e);
                false
            }
        }
    }

    fn same_record(&self, a: &RecipeHandle, b: &RecipeHandle) -> bool {
        a == b || same_file(&self.path_of(a), &self.path_of(b))
    }
}

/// Whether two paths name the same file, as on case-insensitive filesystems
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
