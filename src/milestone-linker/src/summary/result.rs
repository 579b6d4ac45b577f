//! Per-issue result types.

use crate::apply::ApplyStatus;

/// Result of applying the milestone to a linked issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueResult {
    /// Issue number.
    pub number: u64,

    /// What happened to the issue.
    pub status: ApplyStatus,
}
