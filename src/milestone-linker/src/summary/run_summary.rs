//! Run summary types.

use super::result::IssueResult;
use crate::apply::ApplyStatus;
use crate::milestones::ResolvedMilestone;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Repository in `owner/repo` form.
    pub repository: String,

    /// Merged pull request number.
    pub pr_number: u64,

    /// Milestone resolved for this run, if any open version milestone exists.
    pub milestone: Option<ResolvedMilestone>,

    /// Outcome for the pull request itself.
    pub pr: Option<ApplyStatus>,

    /// Outcome for the issue the pull request closes, if it names one.
    pub linked_issue: Option<IssueResult>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(repository: String, pr_number: u64, dry_run: bool) -> Self {
        Self {
            repository,
            pr_number,
            dry_run,
            ..Default::default()
        }
    }

    /// Returns the number of items whose milestone was (or would be) set.
    #[must_use]
    pub fn changes(&self) -> usize {
        let pr = self.pr.iter().filter(|status| status.changed()).count();
        let issue = self
            .linked_issue
            .iter()
            .filter(|result| result.status.changed())
            .count();
        pr + issue
    }

    /// Returns true if the run had nothing to do because no open version
    /// milestone exists.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.milestone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn can_count_changes() {
        let mut summary = RunSummary::new("o/r".to_string(), 10, false);
        assert!(summary.is_noop());
        assert_eq!(summary.changes(), 0);

        summary.milestone = Some(ResolvedMilestone {
            number: 1,
            title: "v0.9.0".to_string(),
            version: Version::new(0, 9, 0),
        });
        summary.pr = Some(ApplyStatus::Applied);
        summary.linked_issue = Some(IssueResult {
            number: 7,
            status: ApplyStatus::AlreadyMilestoned {
                title: "v0.8.0".to_string(),
            },
        });

        assert!(!summary.is_noop());
        assert_eq!(summary.changes(), 1);
    }
}
