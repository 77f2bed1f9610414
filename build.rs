// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: recipe directory
fn dir_arg() -> Arg {
    Arg::new("dir")
        .short('d')
        .long("dir")
        .value_name("PATH")
        .global(true)
        .help("Recipe directory (default: $RECIPEBOX_DIR, then ./recipes)")
}

fn build_cli() -> Command {
    Command::new("recipebox")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Recipebox Contributors")
        .about("Keep a local catalog of recipes, one file per recipe")
        .long_about(
            "Without a subcommand, recipebox starts an interactive menu to view, add, \
             delete, and edit recipes. Each recipe is stored as recipe_<title>.json.",
        )
        .subcommand_required(false)
        .arg(dir_arg())
        .subcommand(Command::new("list").about("List stored recipes"))
        .subcommand(
            Command::new("show").about("Print a recipe").arg(
                Arg::new("name")
                    .required(true)
                    .help("Recipe name as listed, or its title"),
            ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=OUT_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = out_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("recipebox.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
