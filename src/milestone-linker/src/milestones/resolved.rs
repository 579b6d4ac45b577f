//! Resolved milestone information.

use semver::Version;

/// The milestone chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMilestone {
    /// Milestone number used when assigning it.
    pub number: u64,

    /// Milestone title as listed by the tracker.
    pub title: String,

    /// Version parsed from the title.
    pub version: Version,
}
