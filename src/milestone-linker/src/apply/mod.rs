//! Assigning the resolved milestone to issues and pull requests.
//!
//! A milestone is only written when the target is closed and has none yet,
//! so re-running the action never moves an item between milestones.

mod error;
mod status;

pub use error::ApplyError;
pub use status::ApplyStatus;

use crate::milestones::ResolvedMilestone;
use crate::tracker::{IssueRef, IssueState, IssueTracker};
use tracing::{info, info_span, Instrument};

/// Applies a milestone to a closed, unmilestoned issue or pull request.
///
/// This function:
/// 1. Fetches the current issue state
/// 2. Leaves it alone if it already has a milestone or is not closed
/// 3. Otherwise sets the milestone (unless `dry_run`)
///
/// # Arguments
///
/// * `tracker` - Issue tracker client
/// * `issue` - Issue or pull request to update
/// * `milestone` - Milestone to assign
/// * `dry_run` - Report the change without writing it
///
/// # Errors
///
/// Returns [`ApplyError`] if fetching or updating the issue fails.
pub async fn apply_milestone(
    tracker: &dyn IssueTracker,
    issue: &IssueRef,
    milestone: &ResolvedMilestone,
    dry_run: bool,
) -> Result<ApplyStatus, ApplyError> {
    let span = info_span!(
        "apply_milestone",
        issue = %issue,
        milestone = %milestone.title
    );

    async {
        let record = tracker
            .get_issue(issue)
            .await
            .map_err(|source| ApplyError::Fetch {
                number: issue.number,
                source,
            })?;

        if let Some(existing) = record.milestone {
            info!(existing = %existing, "Issue already has a milestone, skipping");
            return Ok(ApplyStatus::AlreadyMilestoned { title: existing });
        }

        if record.state != IssueState::Closed {
            info!("Issue is not closed, skipping");
            return Ok(ApplyStatus::NotClosed);
        }

        if dry_run {
            info!("[DRY RUN] Would assign milestone");
            return Ok(ApplyStatus::WouldApply);
        }

        tracker
            .set_milestone(issue, milestone.number)
            .await
            .map_err(|source| ApplyError::Update {
                number: issue.number,
                source,
            })?;

        info!("Milestone assigned");
        Ok(ApplyStatus::Applied)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{IssueRecord, MockIssueTracker, TrackerError};
    use semver::Version;

    fn milestone() -> ResolvedMilestone {
        ResolvedMilestone {
            number: 3,
            title: "v0.9.0".to_string(),
            version: Version::new(0, 9, 0),
        }
    }

    fn tracker_returning(state: IssueState, milestone: Option<&str>) -> MockIssueTracker {
        let milestone = milestone.map(str::to_string);
        let mut tracker = MockIssueTracker::new();
        tracker.expect_get_issue().returning(move |issue| {
            Ok(IssueRecord {
                number: issue.number,
                state,
                milestone: milestone.clone(),
                body: None,
            })
        });
        tracker
    }

    #[tokio::test]
    async fn applies_to_closed_unmilestoned_issue() {
        let mut tracker = tracker_returning(IssueState::Closed, None);
        tracker
            .expect_set_milestone()
            .withf(|issue, milestone| issue.number == 10 && *milestone == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        let issue = IssueRef::new("o", "r", 10);
        let status = apply_milestone(&tracker, &issue, &milestone(), false)
            .await
            .unwrap();
        assert_eq!(status, ApplyStatus::Applied);
    }

    #[tokio::test]
    async fn never_overwrites_existing_milestone() {
        for state in [IssueState::Open, IssueState::Closed] {
            let mut tracker = tracker_returning(state, Some("v0.8.0"));
            tracker.expect_set_milestone().never();

            let issue = IssueRef::new("o", "r", 10);
            let status = apply_milestone(&tracker, &issue, &milestone(), false)
                .await
                .unwrap();
            assert_eq!(
                status,
                ApplyStatus::AlreadyMilestoned {
                    title: "v0.8.0".to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn never_applies_to_open_issue() {
        let mut tracker = tracker_returning(IssueState::Open, None);
        tracker.expect_set_milestone().never();

        let issue = IssueRef::new("o", "r", 10);
        let status = apply_milestone(&tracker, &issue, &milestone(), false)
            .await
            .unwrap();
        assert_eq!(status, ApplyStatus::NotClosed);
    }

    #[tokio::test]
    async fn dry_run_does_not_write() {
        let mut tracker = tracker_returning(IssueState::Closed, None);
        tracker.expect_set_milestone().never();

        let issue = IssueRef::new("o", "r", 10);
        let status = apply_milestone(&tracker, &issue, &milestone(), true)
            .await
            .unwrap();
        assert_eq!(status, ApplyStatus::WouldApply);
        assert!(status.changed());
    }

    #[tokio::test]
    async fn update_failure_carries_issue_number() {
        let mut tracker = tracker_returning(IssueState::Closed, None);
        tracker.expect_set_milestone().returning(|_, _| {
            Err(TrackerError::InvalidResponse {
                message: "boom".to_string(),
            })
        });

        let issue = IssueRef::new("o", "r", 7);
        let error = apply_milestone(&tracker, &issue, &milestone(), false)
            .await
            .unwrap_err();
        assert!(matches!(error, ApplyError::Update { number: 7, .. }));
        assert_eq!(error.issue_number(), 7);
        assert!(error
            .to_string()
            .starts_with("updating milestone on issue #7"));
    }

    #[tokio::test]
    async fn fetch_failure_is_reported() {
        let mut tracker = MockIssueTracker::new();
        tracker.expect_get_issue().returning(|_| {
            Err(TrackerError::InvalidResponse {
                message: "boom".to_string(),
            })
        });
        tracker.expect_set_milestone().never();

        let issue = IssueRef::new("o", "r", 7);
        let error = apply_milestone(&tracker, &issue, &milestone(), false)
            .await
            .unwrap_err();
        assert!(matches!(error, ApplyError::Fetch { number: 7, .. }));
    }
}
