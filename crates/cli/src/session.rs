//! Menu session loop.
//!
//! Renders the fixed five-option menu, dispatches on exact `"1"`..`"4"`, and
//! treats anything else, including an empty line or a closed input stream, as
//! a quit request. That fall-through is the historical contract of the tool:
//! no confirmation, exit status zero.

use std::io::{BufRead, Write};

use colored::Colorize;
use termblog_core::{BlogError, BlogStore, Result};

use crate::ops;
use crate::prompt::Prompter;

const MENU: [&str; 6] = [
    "Welcome! What would you like to do?:",
    "[1] View all blogs",
    "[2] Add a blog",
    "[3] Create a post",
    "[4] View all posts",
    "[5] Quit",
];

/// Run the interactive session until the user quits or input ends.
pub fn run<S, R, W>(store: &S, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: BlogStore,
    R: BufRead,
    W: Write,
{
    tracing::info!("session started");
    loop {
        for line in MENU {
            prompter.say(line.green())?;
        }
        let choice = match prompter.read_line() {
            Ok(line) => line,
            Err(BlogError::EndOfInput) => {
                tracing::info!("input stream closed at menu");
                goodbye(prompter)?;
                break;
            }
            Err(e) => return Err(e),
        };
        tracing::info!(choice = %choice, "menu selection");
        let outcome = match choice.as_str() {
            "1" => ops::view_blogs(store, prompter),
            "2" => ops::add_blog(store, prompter),
            "3" => ops::add_post(store, prompter),
            "4" => ops::view_posts(store, prompter),
            _ => {
                goodbye(prompter)?;
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(BlogError::EndOfInput) => {
                tracing::info!("input stream closed mid-operation");
                goodbye(prompter)?;
                break;
            }
            Err(e) => return Err(e),
        }
    }
    tracing::info!("session ended");
    Ok(())
}

fn goodbye<R, W>(prompter: &mut Prompter<R, W>) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    prompter.say("Goodbye!".green())?;
    prompter.say("Shutting down...".green())?;
    Ok(())
}
