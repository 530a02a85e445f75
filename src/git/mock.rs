use crate::error::{CommitError, Result};
use crate::git::GitBridge;
use std::cell::{Cell, RefCell};

/// Mock git for testing without touching a repository
///
/// Records every commit message and counts branch lookups so tests can
/// assert which external calls happened.
#[derive(Debug)]
pub struct MockGit {
    branch: std::result::Result<String, String>,
    commit_result: std::result::Result<String, String>,
    branch_lookups: Cell<usize>,
    commits: RefCell<Vec<String>>,
}

impl MockGit {
    /// Create a mock checked out on `branch` whose commits succeed
    pub fn on_branch(branch: impl Into<String>) -> Self {
        MockGit {
            branch: Ok(branch.into()),
            ..Default::default()
        }
    }

    /// Create a mock whose branch lookup fails with `message`
    pub fn failing_branch(message: impl Into<String>) -> Self {
        MockGit {
            branch: Err(message.into()),
            ..Default::default()
        }
    }

    /// Output returned by a successful commit
    pub fn with_commit_output(mut self, output: impl Into<String>) -> Self {
        self.commit_result = Ok(output.into());
        self
    }

    /// Make every commit fail with `message`
    pub fn with_commit_failure(mut self, message: impl Into<String>) -> Self {
        self.commit_result = Err(message.into());
        self
    }

    /// Messages passed to [GitBridge::commit], in call order
    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }

    /// Number of [GitBridge::current_branch] calls
    pub fn branch_lookups(&self) -> usize {
        self.branch_lookups.get()
    }
}

impl Default for MockGit {
    fn default() -> Self {
        MockGit {
            branch: Ok(String::new()),
            commit_result: Ok(String::new()),
            branch_lookups: Cell::new(0),
            commits: RefCell::new(Vec::new()),
        }
    }
}

impl GitBridge for MockGit {
    fn current_branch(&self) -> Result<String> {
        self.branch_lookups.set(self.branch_lookups.get() + 1);
        self.branch
            .as_ref()
            .map(|b| b.trim().to_string())
            .map_err(|e| CommitError::branch_lookup(e.clone()))
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.commits.borrow_mut().push(message.to_string());
        self.commit_result
            .clone()
            .map_err(CommitError::commit_failed)
    }
}
