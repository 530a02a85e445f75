//! Git operations abstraction layer
//!
//! git-cc needs exactly two things from git: the name of the branch that is
//! checked out, and a way to record a commit. Both sit behind the
//! [GitBridge] trait so the validation and confirmation flow can run
//! against a fake.
//!
//! - [command::GitCli]: shells out to the `git` binary
//! - [mock::MockGit]: in-memory implementation for tests
//!
//! ```rust
//! # use git_cc::git::{derive_ticket, GitBridge};
//! # fn example<G: GitBridge>(git: &G) -> git_cc::Result<()> {
//! let ticket = derive_ticket(git)?;
//! git.commit(&format!("fix({}): tidy", ticket))?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;

pub use command::GitCli;
pub use mock::MockGit;

use crate::domain::ticket_from_branch;
use crate::error::Result;

/// The git operations git-cc depends on
///
/// Both calls are synchronous and block until the underlying process exits.
/// Implementations report failures as [crate::error::CommitError::BranchLookup]
/// and [crate::error::CommitError::CommitFailed] carrying the underlying text.
pub trait GitBridge {
    /// Name of the currently checked out branch, whitespace trimmed
    ///
    /// Equivalent to `git branch --show-current`. A detached HEAD yields an
    /// empty string.
    fn current_branch(&self) -> Result<String>;

    /// Record a commit with the given message and return git's output
    ///
    /// Equivalent to `git commit --message <message>`.
    fn commit(&self, message: &str) -> Result<String>;
}

impl<G: GitBridge + ?Sized> GitBridge for &G {
    fn current_branch(&self) -> Result<String> {
        (**self).current_branch()
    }

    fn commit(&self, message: &str) -> Result<String> {
        (**self).commit(message)
    }
}

/// Derive the ticket candidate from the current branch
///
/// The result is not validated; `main` comes back as `"main"`.
pub fn derive_ticket<G: GitBridge + ?Sized>(git: &G) -> Result<String> {
    let branch = git.current_branch()?;
    let ticket = ticket_from_branch(&branch);
    tracing::debug!(%branch, %ticket, "derived ticket from branch");
    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommitError;

    #[test]
    fn test_derive_ticket_from_feature_branch() {
        let git = MockGit::on_branch("NODE-42/my-feature");
        assert_eq!(derive_ticket(&git).unwrap(), "NODE-42");
    }

    #[test]
    fn test_derive_ticket_keeps_unconventional_name() {
        let git = MockGit::on_branch("main");
        assert_eq!(derive_ticket(&git).unwrap(), "main");
    }

    #[test]
    fn test_derive_ticket_propagates_failure() {
        let git = MockGit::failing_branch("fatal: not a git repository");
        let err = derive_ticket(&git).unwrap_err();
        assert!(matches!(err, CommitError::BranchLookup(_)));
        assert!(err.to_string().contains("not a git repository"));
    }
}
