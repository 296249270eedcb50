//! Issue tracker abstraction layer
//!
//! The step only needs two calls from the tracker: list the open milestones
//! of a repository and set the milestone of one issue or pull request.
//! [IssueTracker] captures those, with two implementations:
//!
//! - [github::GitHubTracker]: the GitHub REST API over `reqwest`
//! - [mock::MockTracker]: an in-memory tracker for tests
//!
//! ```rust
//! # use auto_milestone::tracker::IssueTracker;
//! # fn example<T: IssueTracker>(tracker: &T) -> auto_milestone::Result<()> {
//! let milestones = tracker.list_milestones()?;
//! if let Some(first) = milestones.first() {
//!     tracker.assign_milestone(42, first.number)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod github;
pub mod mock;

pub use github::GitHubTracker;
pub use mock::MockTracker;

use std::fmt;

use regex::Regex;

use crate::domain::Milestone;
use crate::error::{AutoMilestoneError, Result};

/// Operations the step performs against the issue tracker.
///
/// Implementations report tracker failures as [AutoMilestoneError::Api],
/// [AutoMilestoneError::Http] or [AutoMilestoneError::Json] and never retry.
pub trait IssueTracker: Send + Sync {
    /// List the open milestones of the repository.
    fn list_milestones(&self) -> Result<Vec<Milestone>>;

    /// Set the milestone of an issue or pull request.
    ///
    /// # Returns
    /// * `Ok(Some(Milestone))` - The milestone the tracker reports as assigned
    /// * `Ok(None)` - If the tracker response carries no milestone
    /// * `Err` - If the update call fails
    fn assign_milestone(&self, issue_number: u64, milestone_number: u64)
        -> Result<Option<Milestone>>;
}

/// An `owner/name` repository slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

const SLUG_PATTERN: &str = r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$";

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a slug such as `octo-org/octo-repo`
    pub fn parse(slug: &str) -> Result<Self> {
        let re = Regex::new(SLUG_PATTERN)
            .map_err(|e| AutoMilestoneError::config(format!("Invalid slug pattern: {}", e)))?;
        let captures = re.captures(slug).ok_or_else(|| {
            AutoMilestoneError::config(format!(
                "Invalid repository '{}' - expected owner/repo",
                slug
            ))
        })?;
        Ok(Repository::new(&captures[1], &captures[2]))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
