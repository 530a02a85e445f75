use thiserror::Error;

use crate::domain::ticket::TICKET_PATTERN_HINT;

/// Unified error type for git-cc operations
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Invalid commit type: {0}")]
    InvalidCommitType(String),

    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Ticket name does not match expected pattern: {}", TICKET_PATTERN_HINT)]
    TicketMismatch(String),

    #[error("Failed to get ticket name from git. Failed with: '{0}'")]
    BranchLookup(String),

    #[error("git commit failed with error: {0}")]
    CommitFailed(String),

    #[error("Invalid option. Aborting")]
    InvalidConfirmation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-cc
pub type Result<T> = std::result::Result<T, CommitError>;

impl CommitError {
    /// Create a branch lookup error with context
    pub fn branch_lookup(msg: impl Into<String>) -> Self {
        CommitError::BranchLookup(msg.into())
    }

    /// Create a commit failure with context
    pub fn commit_failed(msg: impl Into<String>) -> Self {
        CommitError::CommitFailed(msg.into())
    }

    /// Whether the usage text should follow this error on stderr
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            CommitError::InvalidCommitType(_) | CommitError::EmptyMessage
        )
    }
}
