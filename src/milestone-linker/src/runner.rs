//! Orchestrates a milestone-linking run.

mod error;

pub use error::RunnerError;

use crate::apply::apply_milestone;
use crate::config::LinkerConfig;
use crate::linked_issues::linked_issue;
use crate::milestones::{resolve_milestone, ResolveError};
use crate::summary::{IssueResult, RunSummary};
use crate::tracker::{GitHubTracker, IssueRef, IssueTracker};
use tracing::info;

/// Links a merged pull request, and the issue it closes, to the earliest
/// open version milestone.
pub struct Runner {
    config: LinkerConfig,
    tracker: Box<dyn IssueTracker>,
}

impl Runner {
    /// Builds a runner backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Client`] if the GitHub client cannot be built.
    pub fn new(config: LinkerConfig) -> Result<Self, RunnerError> {
        let tracker =
            GitHubTracker::new(config.token(), config.api_url()).map_err(RunnerError::Client)?;
        Ok(Self::with_tracker(config, Box::new(tracker)))
    }

    /// Builds a runner on top of an existing tracker.
    pub fn with_tracker(config: LinkerConfig, tracker: Box<dyn IssueTracker>) -> Self {
        Self { config, tracker }
    }

    /// Executes the full orchestration flow.
    ///
    /// Finding no open version milestone is not an error: the returned
    /// summary has no milestone and nothing is written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let tracker = self.tracker.as_ref();
        let dry_run = self.config.dry_run();
        let repository = self.config.repository();
        let pr = IssueRef::new(
            &repository.owner,
            &repository.name,
            self.config.pr_number(),
        );

        let mut summary = RunSummary::new(repository.to_string(), pr.number, dry_run);
        info!(repo = %repository, pr_number = pr.number, "Linking pull request to milestone");

        let milestone =
            match resolve_milestone(tracker, &repository.owner, &repository.name).await {
                Ok(milestone) => milestone,
                Err(ResolveError::NoOpenMilestone) => {
                    info!("No open version milestones exist, nothing to do");
                    return Ok(summary);
                }
                Err(e) => return Err(RunnerError::Resolve(e)),
            };

        info!(
            milestone = %milestone.title,
            number = milestone.number,
            "Resolved milestone"
        );
        summary.milestone = Some(milestone.clone());

        let pr_status = apply_milestone(tracker, &pr, &milestone, dry_run).await?;
        summary.pr = Some(pr_status);

        let linked = linked_issue(tracker, &pr)
            .await
            .map_err(|source| RunnerError::LinkedIssue {
                number: pr.number,
                source,
            })?;

        if let Some(number) = linked {
            info!(issue_number = number, "Pull request closes issue");
            let issue = pr.sibling(number);
            let status = apply_milestone(tracker, &issue, &milestone, dry_run).await?;
            summary.linked_issue = Some(IssueResult { number, status });
        }

        Ok(summary)
    }
}
