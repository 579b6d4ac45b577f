//! Tracker data types.

use std::fmt;

/// Identifies an issue or pull request.
///
/// GitHub numbers issues and pull requests from the same sequence and serves
/// both through the issues API, so one reference type covers both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Issue or pull request number.
    pub number: u64,
}

impl IssueRef {
    /// Creates a reference to an issue or pull request.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    /// Returns a reference to another issue in the same repository.
    #[must_use]
    pub fn sibling(&self, number: u64) -> Self {
        Self {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            number,
        }
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Open/closed state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneState {
    Open,
    Closed,
}

impl MilestoneState {
    /// Interprets a tracker state string. Anything other than `closed`
    /// (in any case) counts as open, including a missing state.
    pub fn from_api(state: Option<&str>) -> Self {
        match state {
            Some(state) if state.eq_ignore_ascii_case("closed") => Self::Closed,
            _ => Self::Open,
        }
    }
}

/// A milestone as listed by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Milestone number, used when assigning it.
    pub number: u64,

    /// Milestone title, e.g. `v1.2.3`.
    pub title: String,

    /// Current state.
    pub state: MilestoneState,
}

/// Open/closed state of an issue or pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
}

/// The parts of an issue or pull request the linker reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Issue or pull request number.
    pub number: u64,

    /// Current state. Merged pull requests are closed.
    pub state: IssueState,

    /// Title of the assigned milestone, if any.
    pub milestone: Option<String>,

    /// Description text.
    pub body: Option<String>,
}
