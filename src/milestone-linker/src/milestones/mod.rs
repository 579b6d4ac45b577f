//! Milestone resolution.
//!
//! Picks the milestone a merged change ships in: the open milestone with the
//! lowest version title, i.e. the nearest upcoming release.

mod error;
mod resolved;
mod version;

pub use error::ResolveError;
pub use resolved::ResolvedMilestone;
pub use version::parse_version_title;

use crate::tracker::{IssueTracker, Milestone, MilestoneState};
use tracing::{debug, info_span, Instrument};

/// Resolves the lowest open version milestone of a repository.
///
/// # Arguments
///
/// * `tracker` - Issue tracker client
/// * `owner` - Repository owner
/// * `repo` - Repository name
///
/// # Errors
///
/// Returns [`ResolveError::NoOpenMilestone`] if no open milestone has a
/// version title, or [`ResolveError::Tracker`] if listing fails.
pub async fn resolve_milestone(
    tracker: &dyn IssueTracker,
    owner: &str,
    repo: &str,
) -> Result<ResolvedMilestone, ResolveError> {
    let span = info_span!("resolve_milestone", repo = %format!("{owner}/{repo}"));

    async {
        let milestones = tracker.list_open_milestones(owner, repo).await?;
        debug!(count = milestones.len(), "Listed milestones");

        let resolved = select_lowest(milestones).ok_or(ResolveError::NoOpenMilestone)?;
        debug!(
            milestone = %resolved.title,
            number = resolved.number,
            "Lowest open version milestone"
        );
        Ok(resolved)
    }
    .instrument(span)
    .await
}

/// Selects the open milestone with the lowest version title.
///
/// When two milestones carry the same version, the one listed first wins.
pub fn select_lowest(milestones: impl IntoIterator<Item = Milestone>) -> Option<ResolvedMilestone> {
    milestones
        .into_iter()
        .filter(|milestone| milestone.state != MilestoneState::Closed)
        .filter_map(|milestone| {
            let version = parse_version_title(&milestone.title)?;
            Some(ResolvedMilestone {
                number: milestone.number,
                title: milestone.title,
                version,
            })
        })
        .min_by(|a, b| a.version.cmp(&b.version))
}
