#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod apply;
pub mod config;
pub mod linked_issues;
pub mod milestones;
pub mod runner;
pub mod summary;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use apply::{apply_milestone, ApplyError, ApplyStatus};
pub use config::{ConfigError, LinkerConfig, RepositorySlug};
pub use linked_issues::{find_closing_reference, linked_issue};
pub use milestones::{
    parse_version_title, resolve_milestone, select_lowest, ResolveError, ResolvedMilestone,
};
pub use runner::{Runner, RunnerError};
pub use summary::{IssueResult, RunSummary};
pub use tracker::{
    GitHubTracker, IssueRecord, IssueRef, IssueState, IssueTracker, Milestone, MilestoneState,
    TrackerError,
};
