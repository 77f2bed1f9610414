// src/shell/prompt.rs

//! Line-oriented prompting over any reader/writer pair

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Word that ends list entry, compared case-insensitively
pub const LIST_SENTINEL: &str = "exit";

/// Result of asking the user to pick from a numbered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0`, non-numeric input, or end of input
    Cancel,
    /// Zero-based index of the chosen item
    Item(usize),
    /// A number past the end of the list (1-based, as typed)
    OutOfRange(usize),
}

/// Prompts written to `output`, answers read from `input`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Read one line without its terminator; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print a question and read the answer
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.say(question)?;
        self.read_line()
    }

    /// Collect entries until the sentinel word or end of input
    ///
    /// Blank entries are skipped. With `numbered`, each entry is stored as
    /// `"<n>. <text>"`; otherwise the running list is echoed after each one.
    pub fn ask_list(&mut self, question: &str, numbered: bool) -> io::Result<Vec<String>> {
        let mut items = Vec::new();

        while let Some(answer) = self.ask(question)? {
            let answer = answer.trim();
            if answer.eq_ignore_ascii_case(LIST_SENTINEL) {
                break;
            }
            if answer.is_empty() {
                continue;
            }

            if numbered {
                items.push(crate::recipe::number_step(items.len() + 1, answer));
            } else {
                items.push(answer.to_string());
                self.say(format_args!("Current list: [{}]", items.join(", ")))?;
            }
        }

        Ok(items)
    }

    /// Ask for a 1-based position in a list of `count` items
    pub fn choose(&mut self, question: &str, count: usize) -> io::Result<Selection> {
        let Some(answer) = self.ask(question)? else {
            return Ok(Selection::Cancel);
        };

        Ok(match answer.trim().parse::<usize>() {
            Ok(0) | Err(_) => Selection::Cancel,
            Ok(n) if n <= count => Selection::Item(n - 1),
            Ok(n) => Selection::OutOfRange(n),
        })
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
