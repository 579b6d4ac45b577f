//! Issue tracker error types.

use thiserror::Error;

/// Errors returned by an [`IssueTracker`](super::IssueTracker).
#[derive(Debug, Error)]
pub enum TrackerError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The API answered with data the linker cannot use.
    #[error("Invalid response from tracker: {message}")]
    InvalidResponse { message: String },
}
