//! CLI for the milestone linker.
//!
//! Assigns the earliest open version milestone to a merged pull request and
//! to the issue it closes.

use clap::Parser;
use milestone_linker::{ConfigError, LinkerConfig, RunSummary, Runner, RunnerError};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status for a successful or no-op run.
const EXIT_SUCCESS: u8 = 0;

/// Exit status for missing or invalid configuration.
const EXIT_CONFIG: u8 = 1;

/// Exit status for failures during the run.
const EXIT_FAILURE: u8 = 2;

/// Milestone Linker - Assign merged pull requests to the next release milestone.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Repository in owner/repo form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Number of the merged pull request.
    #[arg(long, env = "PR_NUMBER")]
    pr_number: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Report what would change without assigning milestones.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab talks to GitHub over rustls
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here
            return if e.use_stderr() {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Maps a run error to the process exit status.
fn exit_status(error: &RunnerError) -> u8 {
    match error {
        RunnerError::Config(_) => EXIT_CONFIG,
        _ => EXIT_FAILURE,
    }
}

/// Initializes tracing with environment filter support.
///
/// Log output goes to stderr in compact single-line form. The level is read
/// from `RUST_LOG` and falls back to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = build_config(args)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Validates arguments into a run configuration.
fn build_config(args: Args) -> Result<LinkerConfig, ConfigError> {
    Ok(
        LinkerConfig::from_values(args.token, args.repository, args.pr_number, args.api_url)?
            .with_dry_run(args.dry_run),
    )
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repository: {}", summary.repository);

    let Some(milestone) = &summary.milestone else {
        println!("  Milestone: none (no open version milestones)");
        return;
    };
    println!("  Milestone: {} (#{})", milestone.title, milestone.number);

    if let Some(status) = &summary.pr {
        println!("  Pull request #{}: {status}", summary.pr_number);
    }
    match &summary.linked_issue {
        Some(issue) => println!("  Linked issue #{}: {}", issue.number, issue.status),
        None => println!("  Linked issue: none"),
    }
}
