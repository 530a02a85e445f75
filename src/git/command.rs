use crate::error::{CommitError, Result};
use crate::git::GitBridge;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// [GitBridge] backed by the `git` executable on `PATH`
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Run `git` in the current working directory
    pub fn new() -> Self {
        GitCli {
            program: PathBuf::from("git"),
            work_dir: None,
        }
    }

    /// Run `git` inside `dir` instead of the current directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        GitCli {
            work_dir: Some(dir.as_ref().to_path_buf()),
            ..Self::new()
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }
        tracing::debug!(program = %self.program.display(), ?args, "running git");
        cmd.output()
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Summarize a failed git invocation: exit status plus whatever it printed
fn describe_failure(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let detail = [stderr.trim(), stdout.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let status = match output.status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };

    if detail.is_empty() {
        status
    } else {
        format!("{}: {}", status, detail)
    }
}

impl GitBridge for GitCli {
    fn current_branch(&self) -> Result<String> {
        let output = self
            .run(&["branch", "--show-current"])
            .map_err(|e| CommitError::branch_lookup(e.to_string()))?;

        if !output.status.success() {
            return Err(CommitError::branch_lookup(describe_failure(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn commit(&self, message: &str) -> Result<String> {
        let output = self
            .run(&["commit", "--message", message])
            .map_err(|e| CommitError::commit_failed(e.to_string()))?;

        if !output.status.success() {
            return Err(CommitError::commit_failed(describe_failure(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
