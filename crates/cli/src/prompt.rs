//! Interactive input acquisition with retry-until-accepted validation.
//!
//! Every prompt loops until a line satisfies its predicate, printing a
//! diagnostic on each rejection. A closed input stream surfaces as
//! `BlogError::EndOfInput`; it never panics and never loops forever.

use std::fmt::Display;
use std::io::{BufRead, Write};

use colored::Colorize;
use termblog_core::{BlogError, BlogStore, Result};

/// Prompting front end over a line-oriented input and an output sink.
///
/// Generic over the streams so tests can drive it with in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    pub(crate) output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line to the console.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Read one line, newline stripped. EOF is `EndOfInput`, not a crash.
    pub(crate) fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(BlogError::EndOfInput);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Prompt for a non-blank value, e.g. the "title" of a "post".
    ///
    /// Re-prompts until the answer is non-empty after trimming; the returned
    /// line is never blank.
    pub fn read_filled(&mut self, field: &str, context: &str) -> Result<String> {
        loop {
            self.say(format!("What is the {field} of the {context}?").green())?;
            let answer = self.read_line()?;
            if answer.trim().is_empty() {
                tracing::warn!(field, "blank answer rejected");
                self.say(format!("The {field} cannot be blank.").red())?;
                continue;
            }
            return Ok(answer);
        }
    }

    /// Prompt for the id of an existing blog.
    ///
    /// Each attempt re-queries the store and prints the current `[id] name`
    /// listing, so blogs added earlier in the session always show up. The
    /// not-an-integer and no-such-blog rejections carry distinct diagnostics.
    pub fn read_blog_id(&mut self, store: &dyn BlogStore) -> Result<i64> {
        loop {
            for blog in store.list_blogs_by_id()? {
                self.say(format!("[{}] {}", blog.id, blog.name).cyan())?;
            }
            let line = self.read_line()?;
            match check_blog_choice(store, &line) {
                Ok(id) => {
                    tracing::info!(id, "valid blog id entered");
                    return Ok(id);
                }
                Err(BlogError::InvalidInput(_)) => {
                    tracing::warn!(input = %line, "non-integer blog id rejected");
                    self.say("The Blog ID must be an integer".red())?;
                }
                Err(BlogError::NotFound(_)) => {
                    tracing::warn!(input = %line, "id of nonexistent blog rejected");
                    self.say("There is no blog with the given ID".red())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask a yes/no question. Yes iff the first non-whitespace character of
    /// the answer is `y`/`Y`; an empty answer is a decline.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.say(question.green())?;
        let answer = self.read_line()?;
        Ok(answer.trim().chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
    }
}

/// Classify one candidate blog-id line as a tagged outcome the retry loop
/// branches on, rather than recovering via caught exceptions.
fn check_blog_choice(store: &dyn BlogStore, line: &str) -> Result<i64> {
    let id: i64 = line
        .trim()
        .parse()
        .map_err(|_| BlogError::InvalidInput(format!("not an integer: {line:?}")))?;
    if store.blog_exists(id)? {
        Ok(id)
    } else {
        Err(BlogError::NotFound(format!("no blog with id {id}")))
    }
}
