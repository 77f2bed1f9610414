// src/main.rs

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use recipebox::paths;
use recipebox::shell::Shell;
use recipebox::store::FsStore;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    // Diagnostics go to stderr and default to warnings so they stay out of the menu
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "recipebox", &mut io::stdout());
        return Ok(());
    }

    let dir = paths::storage_dir(cli.dir.as_deref());
    let store = FsStore::open(&dir)
        .with_context(|| format!("Cannot use recipe directory {}", dir.display()))?;
    info!("Using recipe directory {:?}", store.root());

    match cli.command {
        Some(Commands::List) => commands::cmd_list(&store, &mut io::stdout().lock()),
        Some(Commands::Show { name }) => commands::cmd_show(&store, &name, &mut io::stdout().lock()),
        Some(Commands::Completions { .. }) => Ok(()),
        None => {
            let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), store);
            shell.run().context("Terminal I/O failed")
        }
    }
}
