// src/recipe/mod.rs

//! Recipe records and their on-disk identity
//!
//! A recipe is identified by its title. The title is turned into a
//! filesystem-safe form (whitespace and path separators become `_`) and the
//! record lives in `recipe_<safeTitle>.json`:
//!
//! ```text
//! "My Soup"  ->  My_Soup  ->  recipe_My_Soup.json
//! ```
//!
//! Two titles with the same safe form share a file; the later write wins.
//!
//! # Example Recipe File
//!
//! ```json
//! {
//!   "title": "My Soup",
//!   "author": "Ana",
//!   "date": "2024-06-01 14:30",
//!   "instructions": {
//!     "time": "45mins",
//!     "ingredients": ["2 carrots", "1 onion"],
//!     "steps": ["1. Chop", "2. Simmer"]
//!   }
//! }
//! ```

pub mod codec;
mod format;

pub use codec::{decode, encode};
pub use format::{
    number_step, or_default, FullRecipe, RecipeInstructions, DEFAULT_AUTHOR, DEFAULT_COOK_TIME,
    DEFAULT_TITLE, EDITED_MARKER,
};

/// Prefix of every recipe file name
pub const FILE_PREFIX: &str = "recipe_";

/// Extension of recipe files
pub const FILE_EXTENSION: &str = "json";

/// Timestamp layout for recipe dates (`2024-06-01 14:30`)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Turn a title into its on-disk identifier
pub fn safe_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// File name backing the recipe with this title
pub fn file_name_for(title: &str) -> String {
    format!("{}{}.{}", FILE_PREFIX, safe_title(title), FILE_EXTENSION)
}

/// Display name for a recipe file, or `None` if the file is not a recipe
///
/// The extension must be `json`; the `recipe_` prefix is stripped when present.
pub fn display_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(FILE_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.strip_prefix(FILE_PREFIX).unwrap_or(stem))
}

/// Current local time in [`DATE_FORMAT`]
pub fn timestamp_now() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
