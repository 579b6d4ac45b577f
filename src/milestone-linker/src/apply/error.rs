//! Milestone application error types.

use crate::tracker::TrackerError;
use thiserror::Error;

/// Errors that can occur while applying a milestone.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// Fetching the issue failed.
    #[error("getting issue #{number}: {source}")]
    Fetch {
        number: u64,
        #[source]
        source: TrackerError,
    },

    /// Writing the milestone failed.
    #[error("updating milestone on issue #{number}: {source}")]
    Update {
        number: u64,
        #[source]
        source: TrackerError,
    },
}

impl ApplyError {
    /// Returns the number of the issue the error relates to.
    pub fn issue_number(&self) -> u64 {
        match self {
            Self::Fetch { number, .. } | Self::Update { number, .. } => *number,
        }
    }
}
