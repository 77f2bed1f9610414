// src/paths.rs
//! Storage directory resolution

use crate::store::DEFAULT_STORAGE_DIR;
use std::path::PathBuf;

/// Environment variable naming the recipe directory
pub const STORAGE_DIR_ENV: &str = "RECIPEBOX_DIR";

/// Get the recipe directory: command line first, then the environment, then `./recipes`
pub fn storage_dir(cli_dir: Option<&str>) -> PathBuf {
    resolve_storage_dir(cli_dir, std::env::var(STORAGE_DIR_ENV).ok())
}

fn resolve_storage_dir(cli_dir: Option<&str>, env_dir: Option<String>) -> PathBuf {
    cli_dir
        .map(PathBuf::from)
        .or_else(|| env_dir.filter(|d| !d.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR))
}
