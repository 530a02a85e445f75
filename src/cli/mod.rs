//! Command line surface: flag parsing and the commit workflow

pub mod args;
pub mod orchestration;

pub use args::{normalize_args, Args};
pub use orchestration::{run_commit_workflow, Outcome};
