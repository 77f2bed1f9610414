// src/lib.rs

//! Recipebox
//!
//! A local, single-user recipe catalog. Every recipe lives in its own JSON
//! file, `recipe_<safeTitle>.json`, inside one storage directory.
//!
//! # Architecture
//!
//! - File-first: the recipe files are the only state; nothing is cached between commands
//! - Record model + codec: serde structs with a fixed JSON field layout
//! - Store: a `RecipeStore` trait with a directory-backed and an in-memory implementation
//! - Shell: menu flows over any reader/writer pair and any store
//! - Atomic writes: temp file, fsync, rename; renames write the new record before removing the old

mod error;
pub mod paths;
pub mod recipe;
pub mod shell;
pub mod store;

pub use error::{Error, Result};
pub use recipe::{decode, encode, safe_title, FullRecipe, RecipeInstructions};
pub use shell::Shell;
pub use store::{FsStore, MemoryStore, RecipeEntry, RecipeHandle, RecipeStore};
