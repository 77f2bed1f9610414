// src/recipe/format.rs

//! Recipe record definitions
//!
//! Field order here is the field order on disk: serde serializes struct
//! fields in declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title stored when the user leaves the title blank
pub const DEFAULT_TITLE: &str = "untitled_recipe";

/// Author stored when the user leaves the author blank
pub const DEFAULT_AUTHOR: &str = "unknown";

/// Cook time stored when input ends before a cook time is entered
pub const DEFAULT_COOK_TIME: &str = "0mins";

/// Marker appended to the date of a recipe that has been edited
pub const EDITED_MARKER: &str = "(edited)";

/// A complete recipe as stored in `recipe_<safeTitle>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRecipe {
    pub title: String,

    pub author: String,

    /// Creation timestamp, followed by ` (edited)` once the recipe was changed
    pub date: String,

    pub instructions: RecipeInstructions,
}

/// Cook time, ingredients, and steps of a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInstructions {
    /// Free-form cook time, e.g. `1hrs 20mins`
    pub time: String,

    pub ingredients: Vec<String>,

    /// Steps, each already numbered (`1. Preheat oven`)
    pub steps: Vec<String>,
}

impl FullRecipe {
    /// Create a recipe from its parts
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        instructions: RecipeInstructions,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            instructions,
        }
    }

    /// Filesystem-safe identifier derived from the title
    pub fn safe_title(&self) -> String {
        super::safe_title(&self.title)
    }

    /// Name of the file that backs this recipe
    pub fn file_name(&self) -> String {
        super::file_name_for(&self.title)
    }

    /// Whether the date carries the edited marker
    pub fn is_edited(&self) -> bool {
        self.date.trim_end().ends_with(EDITED_MARKER)
    }

    /// Append the edited marker to the date, keeping the creation timestamp
    ///
    /// Recipes edited more than once keep a single marker.
    pub fn mark_edited(&mut self) {
        if !self.is_edited() {
            self.date = format!("{} {}", self.date, EDITED_MARKER);
        }
    }
}

/// Human-readable recipe card: header line, then ingredients, then steps
impl fmt::Display for FullRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- {} ---", self.title)?;
        writeln!(
            f,
            "By: {} | Created: {} | Cook Time: {}",
            self.author, self.date, self.instructions.time
        )?;

        writeln!(f)?;
        writeln!(f, "--- Ingredients ---")?;
        for ingredient in &self.instructions.ingredients {
            writeln!(f, "{}", ingredient)?;
        }

        writeln!(f)?;
        writeln!(f, "--- Steps ---")?;
        for step in &self.instructions.steps {
            writeln!(f, "{}", step)?;
        }

        writeln!(f, "---------------------------")
    }
}

impl RecipeInstructions {
    pub fn new(time: impl Into<String>, ingredients: Vec<String>, steps: Vec<String>) -> Self {
        Self {
            time: time.into(),
            ingredients,
            steps,
        }
    }
}

/// Prefix a step with its 1-based position: `number_step(2, "Bake")` is `2. Bake`
pub fn number_step(position: usize, text: &str) -> String {
    format!("{}. {}", position, text)
}

/// Use `default` in place of blank input
pub fn or_default(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
