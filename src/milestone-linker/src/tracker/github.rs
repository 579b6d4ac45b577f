//! [`IssueTracker`] backed by the GitHub REST API.

use super::{
    IssueRecord, IssueRef, IssueState, IssueTracker, Milestone, MilestoneState, TrackerError,
};
use async_trait::async_trait;
use octocrab::{models, Octocrab, Page};
use serde::Serialize;
use tracing::debug;

/// Results per page when listing milestones.
const RESULTS_PER_PAGE: u8 = 100;

/// Query parameters for `GET /repos/{owner}/{repo}/milestones`.
#[derive(Debug, Serialize)]
struct ListMilestonesParams {
    state: &'static str,
    per_page: u8,
}

/// GitHub issue tracker client.
#[derive(Clone)]
pub struct GitHubTracker {
    octocrab: Octocrab,
}

impl GitHubTracker {
    /// Builds an authenticated client.
    ///
    /// # Arguments
    ///
    /// * `token` - GitHub token
    /// * `api_url` - Optional API base URL for GitHub Enterprise
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the base URL is invalid or the client
    /// cannot be constructed.
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self, TrackerError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url)?;
        }
        Ok(Self::from_octocrab(builder.build()?))
    }

    /// Wraps an existing client.
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_open_milestones(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Milestone>, TrackerError> {
        let route = format!("/repos/{owner}/{repo}/milestones");
        let params = ListMilestonesParams {
            state: "open",
            per_page: RESULTS_PER_PAGE,
        };

        let first: Page<models::Milestone> = self.octocrab.get(route, Some(&params)).await?;
        let milestones = self.octocrab.all_pages(first).await?;
        debug!(count = milestones.len(), "Fetched milestones");

        milestones.into_iter().map(convert_milestone).collect()
    }

    async fn get_issue(&self, issue: &IssueRef) -> Result<IssueRecord, TrackerError> {
        let fetched = self
            .octocrab
            .issues(&issue.owner, &issue.repo)
            .get(issue.number)
            .await?;

        Ok(IssueRecord {
            number: fetched.number,
            state: match fetched.state {
                models::IssueState::Closed => IssueState::Closed,
                _ => IssueState::Open,
            },
            milestone: fetched.milestone.map(|milestone| milestone.title),
            body: fetched.body,
        })
    }

    async fn set_milestone(&self, issue: &IssueRef, milestone: u64) -> Result<(), TrackerError> {
        self.octocrab
            .issues(&issue.owner, &issue.repo)
            .update(issue.number)
            .milestone(milestone)
            .send()
            .await?;
        Ok(())
    }
}

fn convert_milestone(milestone: models::Milestone) -> Result<Milestone, TrackerError> {
    let number =
        u64::try_from(milestone.number).map_err(|_| TrackerError::InvalidResponse {
            message: format!(
                "milestone '{}' has invalid number {}",
                milestone.title, milestone.number
            ),
        })?;

    Ok(Milestone {
        number,
        state: MilestoneState::from_api(milestone.state.as_deref()),
        title: milestone.title,
    })
}
