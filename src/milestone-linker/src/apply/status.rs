//! Milestone application status types.

use std::fmt;

/// Outcome of applying a milestone to one issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyStatus {
    /// The milestone was assigned.
    Applied,

    /// The milestone would have been assigned (dry run).
    WouldApply,

    /// A milestone was already assigned and was left alone.
    AlreadyMilestoned {
        /// Title of the existing milestone.
        title: String,
    },

    /// The issue is still open, so it was left alone.
    NotClosed,
}

impl ApplyStatus {
    /// Returns true if the tracker was (or would have been) written to.
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self, Self::Applied | Self::WouldApply)
    }
}

impl fmt::Display for ApplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "milestone assigned"),
            Self::WouldApply => write!(f, "would assign milestone"),
            Self::AlreadyMilestoned { title } => write!(f, "already in milestone {title}"),
            Self::NotClosed => write!(f, "not closed, skipped"),
        }
    }
}
