use std::sync::{Mutex, PoisonError};

use crate::domain::Milestone;
use crate::error::{AutoMilestoneError, Result};
use crate::tracker::IssueTracker;

/// Mock tracker for testing without network access
pub struct MockTracker {
    milestones: Vec<Milestone>,
    assignments: Mutex<Vec<(u64, u64)>>,
    list_failure: Option<(u16, String)>,
    assign_failure: Option<(u16, String)>,
}

impl MockTracker {
    /// Create a new empty mock tracker
    pub fn new() -> Self {
        MockTracker {
            milestones: Vec::new(),
            assignments: Mutex::new(Vec::new()),
            list_failure: None,
            assign_failure: None,
        }
    }

    /// Create a tracker holding milestones with the given titles, numbered from 1
    pub fn with_titles(titles: &[&str]) -> Self {
        let mut tracker = Self::new();
        for (i, title) in titles.iter().enumerate() {
            tracker.add_milestone(Milestone::new(i as u64 + 1, *title));
        }
        tracker
    }

    pub fn add_milestone(&mut self, milestone: Milestone) {
        self.milestones.push(milestone);
    }

    /// Make `list_milestones` fail with an API error
    pub fn fail_list(&mut self, status: u16, message: impl Into<String>) {
        self.list_failure = Some((status, message.into()));
    }

    /// Make `assign_milestone` fail with an API error
    pub fn fail_assign(&mut self, status: u16, message: impl Into<String>) {
        self.assign_failure = Some((status, message.into()));
    }

    /// Recorded `(issue_number, milestone_number)` updates, oldest first
    pub fn assignments(&self) -> Vec<(u64, u64)> {
        self.assignments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueTracker for MockTracker {
    fn list_milestones(&self) -> Result<Vec<Milestone>> {
        if let Some((status, message)) = &self.list_failure {
            return Err(AutoMilestoneError::api(*status, message.clone()));
        }
        Ok(self.milestones.clone())
    }

    fn assign_milestone(
        &self,
        issue_number: u64,
        milestone_number: u64,
    ) -> Result<Option<Milestone>> {
        if let Some((status, message)) = &self.assign_failure {
            return Err(AutoMilestoneError::api(*status, message.clone()));
        }

        self.assignments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((issue_number, milestone_number));

        Ok(self
            .milestones
            .iter()
            .find(|m| m.number == milestone_number)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tracker_lists_milestones() {
        let tracker = MockTracker::with_titles(&["v1.0", "Backlog"]);
        let milestones = tracker.list_milestones().unwrap();
        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0], Milestone::new(1, "v1.0"));
        assert_eq!(milestones[1].number, 2);
    }

    #[test]
    fn test_mock_tracker_records_assignments() {
        let tracker = MockTracker::with_titles(&["v1.0"]);
        let assigned = tracker.assign_milestone(42, 1).unwrap();
        assert_eq!(assigned.map(|m| m.title), Some("v1.0".to_string()));
        assert_eq!(tracker.assignments(), vec![(42, 1)]);
    }

    #[test]
    fn test_mock_tracker_keeps_assignments_after_poisoned_lock() {
        let tracker = MockTracker::with_titles(&["v1.0"]);
        tracker.assign_milestone(1, 1).unwrap();

        std::thread::scope(|s| {
            let handle = s.spawn(|| {
                let _guard = tracker.assignments.lock().unwrap();
                panic!("holder of the assignments lock panicked");
            });
            assert!(handle.join().is_err());
        });
        assert!(tracker.assignments.is_poisoned());

        tracker.assign_milestone(2, 1).unwrap();
        assert_eq!(tracker.assignments(), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_mock_tracker_failures() {
        let mut tracker = MockTracker::new();
        tracker.fail_list(500, "Server Error");
        tracker.fail_assign(403, "Forbidden");

        let err = tracker.list_milestones().unwrap_err();
        assert_eq!(err.to_string(), "GitHub API error (500): Server Error");
        assert!(tracker.assign_milestone(1, 1).is_err());
        assert!(tracker.assignments().is_empty());
    }
}
