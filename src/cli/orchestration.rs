//! Main workflow orchestration logic
//!
//! Runs one git-cc invocation from resolved [CommitOptions] to its
//! [Outcome]. Git access and the standard streams are passed in, so the
//! whole flow can run against [crate::git::MockGit] and in-memory buffers.

use std::io::{BufRead, Write};

use crate::config::CommitOptions;
use crate::domain::{build_commit_message, validate_ticket_name, CommitType};
use crate::error::{CommitError, Result};
use crate::git::{derive_ticket, GitBridge};
use crate::ui::{self, Answer};

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The commit type table was printed
    ListedTypes,
    /// The composed message was printed and nothing was committed
    DryRun { message: String },
    /// The user confirmed and git recorded the commit
    Committed { message: String, output: String },
    /// The user declined; nothing was committed
    Aborted { message: String },
}

/// Main commit workflow
///
/// 1. `list_types` short-circuits before any validation
/// 2. Validate commit type, then message
/// 3. Derive the ticket from the branch when enabled
/// 4. Validate the ticket pattern, whatever its source
/// 5. Compose the message, then dry-run or confirm and commit
///
/// Output meant for stdout goes to `out`; failures come back as errors
/// for the caller to report.
pub fn run_commit_workflow<G, R, W>(
    options: &CommitOptions,
    git: &G,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome>
where
    G: GitBridge + ?Sized,
    R: BufRead,
    W: Write,
{
    if options.list_types {
        ui::write_commit_types(out)?;
        return Ok(Outcome::ListedTypes);
    }

    let commit_type: CommitType = options.commit_type.parse()?;

    if options.message.is_empty() {
        return Err(CommitError::EmptyMessage);
    }

    let ticket = if options.auto_ticket {
        derive_ticket(git)?
    } else {
        options.ticket.clone().unwrap_or_default()
    };

    if !validate_ticket_name(&ticket) {
        return Err(CommitError::TicketMismatch(ticket));
    }

    let message = build_commit_message(
        commit_type.as_str(),
        &ticket,
        &options.message,
        options.breaking,
    );
    tracing::debug!(%message, dry_run = options.dry_run, "composed commit message");

    if options.dry_run {
        writeln!(out, "{}", ui::format_dry_run(&message))?;
        return Ok(Outcome::DryRun { message });
    }

    match ui::confirm_commit(&message, input, out)? {
        Answer::Yes => {
            let output = git.commit(&message)?;
            writeln!(out)?;
            writeln!(out, "{}", output)?;
            Ok(Outcome::Committed { message, output })
        }
        Answer::No => {
            writeln!(out, "Aborting")?;
            Ok(Outcome::Aborted { message })
        }
        Answer::Invalid(reply) => Err(CommitError::InvalidConfirmation(reply)),
    }
}
