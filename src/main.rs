use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;

use git_cc::cli::{run_commit_workflow, Args, Outcome};
use git_cc::config::CommitOptions;
use git_cc::git::GitCli;
use git_cc::ui;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with the commit output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse_normalized();
    let options = CommitOptions::from(&args);
    tracing::debug!(?options, "resolved options");

    let git = GitCli::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let result = run_commit_workflow(&options, &git, &mut input, &mut out);
    out.flush().context("Failed to flush stdout")?;

    match result {
        Ok(outcome) => {
            if let Outcome::Committed { message, .. } = &outcome {
                tracing::info!(%message, "commit created");
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            if e.shows_usage() {
                ui::display_usage(&Args::command().render_help().to_string());
            }
            std::process::exit(1);
        }
    }
}
