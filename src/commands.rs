// src/commands.rs
//! Command handlers for the recipebox CLI

use anyhow::{Context, Result};
use recipebox::recipe::{self, safe_title};
use recipebox::store::{RecipeEntry, RecipeStore};
use std::io::Write;
use tracing::info;

/// Print every stored recipe name, one per line
pub fn cmd_list(store: &impl RecipeStore, out: &mut impl Write) -> Result<()> {
    let entries = store.list().context("Failed to list recipes")?;
    info!("Listing {} recipe(s)", entries.len());

    for entry in entries {
        writeln!(out, "{}", entry.name)?;
    }
    Ok(())
}

/// Print one recipe, found by its listed name or by its title
pub fn cmd_show(store: &impl RecipeStore, name: &str, out: &mut impl Write) -> Result<()> {
    let entry = find_entry(store, name)?
        .ok_or_else(|| anyhow::anyhow!("Recipe not found: {}", name))?;

    let text = store
        .read(&entry.handle)
        .with_context(|| format!("Failed to read recipe '{}'", entry.name))?;
    let recipe = recipe::decode(&text)
        .with_context(|| format!("Recipe '{}' is unreadable", entry.name))?;

    write!(out, "{}", recipe)?;
    Ok(())
}

fn find_entry(store: &impl RecipeStore, name: &str) -> Result<Option<RecipeEntry>> {
    let wanted = safe_title(name.trim());
    let entries = store.list().context("Failed to list recipes")?;

    Ok(entries
        .into_iter()
        .find(|entry| entry.name == name || entry.name == wanted))
}
