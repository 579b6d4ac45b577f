//! Milestone resolution error types.

use crate::tracker::TrackerError;
use thiserror::Error;

/// Errors that can occur while resolving the target milestone.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No open milestone has a version title. Callers treat this as
    /// "nothing to do" rather than a failure.
    #[error("no open version milestones were found")]
    NoOpenMilestone,

    /// Listing milestones failed.
    #[error("retrieving list of milestones: {0}")]
    Tracker(#[from] TrackerError),
}
