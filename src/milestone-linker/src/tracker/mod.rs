//! Access to the issue tracker.
//!
//! The linker needs three operations from the tracker: list milestones, read
//! an issue (or pull request) and set its milestone. They are grouped behind
//! [`IssueTracker`] so the decision logic does not depend on the transport.

mod error;
mod github;
mod types;

pub use error::TrackerError;
pub use github::GitHubTracker;
pub use types::{IssueRecord, IssueRef, IssueState, Milestone, MilestoneState};

use async_trait::async_trait;

/// Read/write operations against an issue tracker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists the open milestones of a repository, across all pages.
    async fn list_open_milestones(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Milestone>, TrackerError>;

    /// Fetches an issue or pull request.
    async fn get_issue(&self, issue: &IssueRef) -> Result<IssueRecord, TrackerError>;

    /// Sets the milestone of an issue or pull request.
    async fn set_milestone(&self, issue: &IssueRef, milestone: u64) -> Result<(), TrackerError>;
}
