// src/cli.rs
//! CLI definitions for recipebox
//!
//! Running without a subcommand starts the interactive menu. The
//! subcommands are non-interactive shortcuts for scripting.
//! The command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(author = "Recipebox Contributors")]
#[command(version)]
#[command(about = "Keep a local catalog of recipes, one file per recipe", long_about = None)]
pub struct Cli {
    /// Recipe directory (default: $RECIPEBOX_DIR, then ./recipes)
    #[arg(short, long, global = true)]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored recipes
    List,

    /// Print a recipe
    Show {
        /// Recipe name as listed, or its title
        name: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
