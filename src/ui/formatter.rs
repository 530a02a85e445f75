//! Pure formatting functions for UI output.
//!
//! Everything that decides what the user reads lives here; the prompt in
//! the parent module only handles reading and writing.

use console::style;
use std::io::{self, Write};

use crate::domain::CommitType;

/// The error line: a red `ERROR:` prefix (when stderr is a terminal) and the message.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}

/// Print an error message on stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print command usage after an argument error.
pub fn display_usage(usage: &str) {
    eprintln!("\n{}", usage.trim_end());
}

/// The table printed by `-list-types`.
///
/// One line per commit type, in the order of [CommitType::ALL].
pub fn format_commit_types() -> String {
    let mut table = String::from("Commit Types\n");
    for commit_type in CommitType::ALL {
        table.push_str(&format!(
            "    {}: {}\n",
            commit_type,
            commit_type.description()
        ));
    }
    table
}

/// Write the commit type table.
pub fn write_commit_types<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(format_commit_types().as_bytes())
}

/// Question asked before committing.
pub fn format_commit_prompt(message: &str) -> String {
    format!("Create new commit with message \"{}\"? (y/n):", message)
}

/// Line shown instead of the prompt in dry-run mode.
pub fn format_dry_run(message: &str) -> String {
    format!("Commit message: \"{}\"", message)
}
