use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::milestone::Milestone;
use crate::error::{AutoMilestoneError, Result};

/// Issue or pull request carried by a webhook event
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventItem {
    pub number: u64,
    #[serde(default)]
    pub milestone: Option<Milestone>,
}

/// The subset of a webhook payload this step reads
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub issue: Option<EventItem>,
    #[serde(default)]
    pub pull_request: Option<EventItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Issue,
    PullRequest,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Issue => write!(f, "issue"),
            TargetKind::PullRequest => write!(f, "pull request"),
        }
    }
}

/// The issue or pull request a milestone will be assigned to
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub kind: TargetKind,
    pub number: u64,
    pub milestone: Option<Milestone>,
}

impl EventPayload {
    /// Read the payload the runner wrote to `GITHUB_EVENT_PATH`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AutoMilestoneError::event(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The issue if present, otherwise the pull request
    pub fn target(&self) -> Result<Target> {
        if let Some(issue) = &self.issue {
            return Ok(Target {
                kind: TargetKind::Issue,
                number: issue.number,
                milestone: issue.milestone.clone(),
            });
        }

        if let Some(pr) = &self.pull_request {
            return Ok(Target {
                kind: TargetKind::PullRequest,
                number: pr.number,
                milestone: pr.milestone.clone(),
            });
        }

        Err(AutoMilestoneError::event(
            "Event payload has neither an issue nor a pull request",
        ))
    }
}
