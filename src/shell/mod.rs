// src/shell/mod.rs

//! Interactive recipe menu
//!
//! The shell reads commands from any `BufRead` and writes to any `Write`, and
//! talks to storage only through [`RecipeStore`]. Each flow (view, add,
//! delete, edit) runs to completion before the menu is shown again.
//!
//! Store and decode failures end the current flow with a message; only
//! failures of the terminal itself are returned to the caller.

mod prompt;

pub use prompt::{Prompt, Selection, LIST_SENTINEL};

use crate::error::Error;
use crate::recipe::{
    self, or_default, FullRecipe, RecipeInstructions, DEFAULT_AUTHOR, DEFAULT_COOK_TIME,
    DEFAULT_TITLE,
};
use crate::store::{RecipeEntry, RecipeStore};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "\n1. View recipes\n2. Add recipe\n3. Delete recipe\n4. Edit recipe\n5. Exit";

const EDIT_MENU: &str = "What would you like to change?\n1. Title\n2. Author\n3. Instructions\n(any other input cancels)";

/// Source of creation timestamps
pub type Clock = Box<dyn Fn() -> String>;

/// Menu-driven recipe manager
pub struct Shell<R, W, S> {
    prompt: Prompt<R, W>,
    store: S,
    clock: Clock,
}

impl<R: BufRead, W: Write, S: RecipeStore> Shell<R, W, S> {
    pub fn new(input: R, output: W, store: S) -> Self {
        Self {
            prompt: Prompt::new(input, output),
            store,
            clock: Box::new(recipe::timestamp_now),
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: impl Fn() -> String + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &W {
        self.prompt.output()
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Show the menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.prompt.say("Hello! What would you like to do? ")?;

        loop {
            let Some(choice) = self.prompt.ask(MENU)? else {
                debug!("End of input, leaving menu");
                return Ok(());
            };

            match choice.trim() {
                "1" => self.view_recipes()?,
                "2" => self.add_recipe()?,
                "3" => self.delete_recipe()?,
                "4" => self.edit_recipe()?,
                "5" => return Ok(()),
                _ => self.prompt.say("Invalid choice, please select option 1-5")?,
            }
        }
    }

    /// Print one recipe chosen from the list
    pub fn view_recipes(&mut self) -> io::Result<()> {
        let Some(entry) = self.pick(
            "No recipes found to view.",
            "\nEnter the number of the recipe to view (or '0' to go back):",
        )?
        else {
            return Ok(());
        };

        if let Some(recipe) = self.load(&entry)? {
            self.show(&recipe)?;
        }
        Ok(())
    }

    /// Collect a new recipe and save it
    pub fn add_recipe(&mut self) -> io::Result<()> {
        let draft = self.capture_recipe_fields()?;
        self.save_new(&draft)
    }

    /// Delete one recipe chosen from the list
    pub fn delete_recipe(&mut self) -> io::Result<()> {
        let Some(entry) = self.pick("Nothing to delete.", "Enter the number to delete (or '0' to cancel):")?
        else {
            return Ok(());
        };

        if self.store.delete(&entry.handle) {
            self.prompt.say("Deleted.")
        } else {
            self.prompt.say("Error deleting.")
        }
    }

    /// Change the title, author, or instructions of one recipe
    pub fn edit_recipe(&mut self) -> io::Result<()> {
        let Some(entry) = self.pick(
            "No recipes to edit.",
            "Enter the number of the recipe to edit (or '0' to cancel):",
        )?
        else {
            return Ok(());
        };

        let Some(mut recipe) = self.load(&entry)? else {
            return Ok(());
        };

        let choice = self.prompt.ask(EDIT_MENU)?;
        match choice.as_deref().map(str::trim) {
            Some("1") => match self.prompt.ask("Enter new recipe title: ")? {
                Some(title) => recipe.title = self.title_or_default(&title),
                None => return self.prompt.say("Edit cancelled."),
            },
            Some("2") => match self.prompt.ask("Enter new author's name: ")? {
                Some(author) => recipe.author = self.author_or_default(&author),
                None => return self.prompt.say("Edit cancelled."),
            },
            Some("3") => recipe.instructions = self.capture_instructions()?,
            _ => return self.prompt.say("Edit cancelled."),
        }

        recipe.mark_edited();

        let text = match recipe::encode(&recipe) {
            Ok(text) => text,
            Err(e) => return self.report("Recipe not saved", &e),
        };

        match self.store.replace(&entry.handle, &recipe.title, &text) {
            Ok(handle) => {
                debug!("Edited recipe stored as {}", handle);
                self.prompt.say("Recipe updated!")
            }
            Err(e) => self.report("Recipe not saved", &e),
        }
    }

    /// Build a draft recipe from user input, stamped with the current time
    pub fn capture_recipe_fields(&mut self) -> io::Result<FullRecipe> {
        let title = self.prompt.ask("Enter recipe title: ")?.unwrap_or_default();
        let title = self.title_or_default(&title);

        let author = self.prompt.ask("Enter Author's name: ")?.unwrap_or_default();
        let author = self.author_or_default(&author);

        let instructions = self.capture_instructions()?;
        let date = (self.clock)();

        Ok(FullRecipe::new(title, author, instructions, date))
    }

    /// Collect cook time, ingredients, and numbered steps
    pub fn capture_instructions(&mut self) -> io::Result<RecipeInstructions> {
        let time = match self.prompt.ask("Enter recipe cook time (write as '_hrs _mins'): ")? {
            Some(time) => time.trim().to_string(),
            None => {
                debug!("No cook time given, using {}", DEFAULT_COOK_TIME);
                DEFAULT_COOK_TIME.to_string()
            }
        };

        let ingredients = self
            .prompt
            .ask_list("Enter ingredient (type 'exit' to finish): ", false)?;
        let steps = self.prompt.ask_list("Enter step (type 'exit' to finish): ", true)?;

        Ok(RecipeInstructions::new(time, ingredients, steps))
    }

    fn save_new(&mut self, draft: &FullRecipe) -> io::Result<()> {
        let text = match recipe::encode(draft) {
            Ok(text) => text,
            Err(e) => return self.report("Recipe not saved", &e),
        };

        match self.store.write(&draft.title, &text) {
            Ok(handle) => {
                debug!("New recipe stored as {}", handle);
                self.prompt.say("Recipe saved!")
            }
            Err(e) => self.report("Recipe not saved", &e),
        }
    }

    /// List recipes and let the user choose one
    fn pick(&mut self, empty_message: &str, question: &str) -> io::Result<Option<RecipeEntry>> {
        let mut entries = match self.store.list() {
            Ok(entries) => entries,
            Err(e) => {
                self.report("Could not list recipes", &e)?;
                return Ok(None);
            }
        };

        if entries.is_empty() {
            self.prompt.say(empty_message)?;
            return Ok(None);
        }

        self.prompt.say("Available Recipes:")?;
        for (i, entry) in entries.iter().enumerate() {
            self.prompt.say(format_args!("{}. {}", i + 1, entry.name))?;
        }

        match self.prompt.choose(question, entries.len())? {
            Selection::Item(index) => Ok(Some(entries.swap_remove(index))),
            Selection::OutOfRange(n) => {
                self.report("Selection failed", &Error::NotFound(format!("no recipe at position {}", n)))?;
                Ok(None)
            }
            Selection::Cancel => Ok(None),
        }
    }

    /// Read and decode a listed recipe, reporting failures
    fn load(&mut self, entry: &RecipeEntry) -> io::Result<Option<FullRecipe>> {
        let text = match self.store.read(&entry.handle) {
            Ok(text) => text,
            Err(e) if e.is_not_found() => {
                self.prompt
                    .say(format_args!("Recipe '{}' no longer exists.", entry.name))?;
                return Ok(None);
            }
            Err(e) if e.is_malformed() => {
                self.report(&format!("Recipe '{}' is unreadable", entry.name), &e)?;
                return Ok(None);
            }
            Err(e) => {
                self.report(&format!("Could not read recipe '{}'", entry.name), &e)?;
                return Ok(None);
            }
        };

        match recipe::decode(&text) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(e) => {
                self.report(&format!("Recipe '{}' is unreadable", entry.name), &e)?;
                Ok(None)
            }
        }
    }

    fn show(&mut self, recipe: &FullRecipe) -> io::Result<()> {
        self.prompt.say(recipe)
    }

    fn report(&mut self, context: &str, err: &Error) -> io::Result<()> {
        warn!("{}: {}", context, err);
        self.prompt.say(format_args!("{}: {}", context, err))
    }

    fn title_or_default(&self, input: &str) -> String {
        if input.trim().is_empty() {
            debug!("Blank title, using {}", DEFAULT_TITLE);
        }
        or_default(input, DEFAULT_TITLE)
    }

    fn author_or_default(&self, input: &str) -> String {
        if input.trim().is_empty() {
            debug!("Blank author, using {}", DEFAULT_AUTHOR);
        }
        or_default(input, DEFAULT_AUTHOR)
    }
}
