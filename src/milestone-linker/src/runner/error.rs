//! Runner error types.

use crate::apply::ApplyError;
use crate::config::ConfigError;
use crate::milestones::ResolveError;
use crate::tracker::TrackerError;

/// Errors that can occur while running the linker.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error("creating GitHub client: {0}")]
    Client(#[source] TrackerError),

    /// Milestone resolution errors.
    #[error("getting milestone id: {0}")]
    Resolve(#[source] ResolveError),

    /// Errors applying the milestone to the pull request or linked issue.
    #[error(transparent)]
    Apply(#[from] ApplyError),

    /// Errors reading the pull request description.
    #[error("getting linked issues for #{number}: {source}")]
    LinkedIssue {
        number: u64,
        #[source]
        source: TrackerError,
    },
}
