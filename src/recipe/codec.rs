// src/recipe/codec.rs

//! Recipe document encoding and decoding
//!
//! Documents are pretty-printed JSON. Every field of the schema is required
//! when decoding; unknown keys are ignored.

use super::format::FullRecipe;
use crate::error::{Error, Result};
use tracing::debug;

/// Serialize a recipe to its stored text form
pub fn encode(recipe: &FullRecipe) -> Result<String> {
    serde_json::to_string_pretty(recipe).map_err(Error::Encode)
}

/// Parse stored text back into a recipe
pub fn decode(text: &str) -> Result<FullRecipe> {
    serde_json::from_str(text).map_err(|e| {
        debug!("Rejected recipe document: {}", e);
        Error::Decode(e)
    })
}
