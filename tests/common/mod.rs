// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recipebox::recipe::{self, FullRecipe, RecipeInstructions};
use recipebox::store::{FsStore, RecipeHandle, RecipeStore};
use recipebox::Shell;
use std::io::Cursor;
use tempfile::TempDir;

/// Timestamp every test shell stamps on new recipes
pub const FIXED_DATE: &str = "2024-06-01 14:30";

/// Create an empty store in a fresh temporary directory.
///
/// Returns (TempDir, store) - keep the TempDir alive to prevent cleanup.
pub fn setup_store() -> (TempDir, FsStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = FsStore::open(temp_dir.path().join("recipes")).unwrap();
    (temp_dir, store)
}

/// Feed `input` to an interactive shell over `store` and return everything it printed.
pub fn run_shell(store: &FsStore, input: &str) -> String {
    run_shell_bytes(store, input.as_bytes())
}

/// Like [`run_shell`], for input that is not valid UTF-8.
pub fn run_shell_bytes(store: &FsStore, input: &[u8]) -> String {
    let mut shell = Shell::new(Cursor::new(input.to_vec()), Vec::new(), store.clone())
        .with_clock(|| FIXED_DATE.to_string());
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

/// A small recipe with two ingredients and two steps.
pub fn sample_recipe(title: &str) -> FullRecipe {
    FullRecipe::new(
        title,
        "Ana",
        RecipeInstructions::new(
            "45mins",
            vec!["2 carrots".to_string(), "1 onion".to_string()],
            vec!["1. Chop".to_string(), "2. Simmer".to_string()],
        ),
        "2024-01-15 10:30",
    )
}

/// Encode and store a recipe under its own title.
pub fn seed(store: &FsStore, recipe: &FullRecipe) -> RecipeHandle {
    store
        .write(&recipe.title, &recipe::encode(recipe).unwrap())
        .unwrap()
}

/// Read and decode the recipe stored for `title`.
pub fn load(store: &FsStore, title: &str) -> FullRecipe {
    let text = store.read(&RecipeHandle::for_title(title)).unwrap();
    recipe::decode(&text).unwrap()
}

/// File names currently in the storage directory, sorted.
pub fn files_on_disk(store: &FsStore) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(store.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}
