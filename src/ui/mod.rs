//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - The commit confirmation prompt

use std::io::{BufRead, Write};

use crate::error::Result;

pub mod formatter;

pub use formatter::{
    display_error, display_usage, format_commit_prompt, format_commit_types, format_dry_run,
    format_error, write_commit_types,
};

/// A user's reply to the commit confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything else, normalized; an empty string means no input
    Invalid(String),
}

impl Answer {
    /// Interpret a raw input line.
    ///
    /// Surrounding whitespace is trimmed and case ignored: `y`/`yes` confirm,
    /// `n`/`no` decline.
    pub fn parse(raw: &str) -> Self {
        let response = raw.trim().to_lowercase();
        match response.as_str() {
            "y" | "yes" => Answer::Yes,
            "n" | "no" => Answer::No,
            _ => Answer::Invalid(response),
        }
    }
}

/// Ask whether to create the commit and read exactly one line of input.
///
/// Blocks until a line (or end of input) arrives. There is no retry: an
/// unrecognized reply is returned as [Answer::Invalid].
pub fn confirm_commit<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Answer> {
    writeln!(out, "{}", format_commit_prompt(message))?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = Answer::parse(&line);
    tracing::debug!(?answer, "confirmation answer");
    Ok(answer)
}
