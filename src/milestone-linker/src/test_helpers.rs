//! In-memory tracker used by tests.

use crate::tracker::{
    IssueRecord, IssueRef, IssueState, IssueTracker, Milestone, MilestoneState, TrackerError,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    milestones: Vec<Milestone>,
    issues: BTreeMap<u64, IssueRecord>,
    writes: Vec<(u64, u64)>,
}

/// A tracker holding issues and milestones in memory. Clones share state so
/// tests can inspect writes after handing a clone to the runner.
#[derive(Clone, Default)]
pub(crate) struct InMemoryTracker {
    state: Arc<Mutex<State>>,
}

impl InMemoryTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_milestone(self, number: u64, title: &str, state: MilestoneState) -> Self {
        self.state.lock().unwrap().milestones.push(Milestone {
            number,
            title: title.to_string(),
            state,
        });
        self
    }

    pub(crate) fn with_issue(
        self,
        number: u64,
        state: IssueState,
        milestone: Option<&str>,
        body: Option<&str>,
    ) -> Self {
        self.state.lock().unwrap().issues.insert(
            number,
            IssueRecord {
                number,
                state,
                milestone: milestone.map(str::to_string),
                body: body.map(str::to_string),
            },
        );
        self
    }

    /// Returns the milestone title currently assigned to an issue.
    pub(crate) fn milestone_of(&self, number: u64) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .issues
            .get(&number)
            .and_then(|issue| issue.milestone.clone())
    }

    /// Returns every `(issue, milestone)` write in order.
    pub(crate) fn writes(&self) -> Vec<(u64, u64)> {
        self.state.lock().unwrap().writes.clone()
    }
}

fn not_found(number: u64) -> TrackerError {
    TrackerError::InvalidResponse {
        message: format!("issue #{number} not found"),
    }
}

#[async_trait]
impl IssueTracker for InMemoryTracker {
    async fn list_open_milestones(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<Vec<Milestone>, TrackerError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .milestones
            .iter()
            .filter(|milestone| milestone.state == MilestoneState::Open)
            .cloned()
            .collect())
    }

    async fn get_issue(&self, issue: &IssueRef) -> Result<IssueRecord, TrackerError> {
        let state = self.state.lock().unwrap();
        state
            .issues
            .get(&issue.number)
            .cloned()
            .ok_or_else(|| not_found(issue.number))
    }

    async fn set_milestone(&self, issue: &IssueRef, milestone: u64) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        let title = state
            .milestones
            .iter()
            .find(|m| m.number == milestone)
            .map(|m| m.title.clone())
            .ok_or_else(|| TrackerError::InvalidResponse {
                message: format!("milestone {milestone} not found"),
            })?;

        let record = state
            .issues
            .get_mut(&issue.number)
            .ok_or_else(|| not_found(issue.number))?;
        record.milestone = Some(title);
        state.writes.push((issue.number, milestone));
        Ok(())
    }
}
