//! Main workflow orchestration logic
//!
//! Runs one assignment pass: check the overwrite gate, list milestones,
//! select the highest version and update the target. Kept apart from
//! main.rs so the workflow can be driven by any [IssueTracker].

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{Milestone, MilestoneSelector, Target};
use crate::error::Result;
use crate::tracker::IssueTracker;
use crate::ui;

/// Arguments for the assign workflow that do not come from [Config]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignWorkflowArgs {
    /// Select and report the milestone without updating the target
    pub dry_run: bool,
}

/// Result of a successful assign workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The target already had a milestone and overwriting is disabled
    Skipped { existing: Milestone },

    /// The milestone that would have been assigned in dry-run mode
    Planned { milestone: Milestone },

    /// The milestone the tracker reports as assigned
    Assigned { milestone: Milestone },
}

impl WorkflowResult {
    /// The milestone to publish as step outputs, if any
    pub fn output_milestone(&self) -> Option<&Milestone> {
        match self {
            WorkflowResult::Skipped { .. } => None,
            WorkflowResult::Planned { milestone } | WorkflowResult::Assigned { milestone } => {
                Some(milestone)
            }
        }
    }
}

/// Main assign workflow
///
/// 1. Skip when the target has a milestone and `overwrite` is off
/// 2. List open milestones from the tracker
/// 3. Select the milestone with the highest version title
/// 4. Assign it to the target (unless `dry_run`)
///
/// # Returns
///
/// * `Ok(WorkflowResult)` - What happened to the target
/// * `Err(NoMatchedMilestones)` - If no milestone title is a version label
/// * `Err` - Any tracker failure, unchanged
pub fn run_assign_workflow<T: IssueTracker + ?Sized>(
    tracker: &T,
    target: &Target,
    config: &Config,
    args: &AssignWorkflowArgs,
) -> Result<WorkflowResult> {
    if let Some(existing) = &target.milestone {
        if !config.behavior.overwrite {
            return Ok(WorkflowResult::Skipped {
                existing: existing.clone(),
            });
        }
    }

    let milestones = tracker.list_milestones()?;
    let selection = MilestoneSelector::new(config.parser()).select(&milestones);

    if !selection.unmatched.is_empty() {
        let titles = selection.unmatched.iter().map(|m| m.title.clone()).collect();
        ui::debug(&BoundaryWarning::UnmatchedTitles { titles }.to_string());
    }
    ui::debug(&ui::formatter::format_matched_milestones(&selection.matched));

    let best = selection.best()?;
    ui::debug(&format!(
        "Max version: {} (normalised {})",
        best.milestone.title, best.version
    ));
    let selected = best.milestone.clone();

    if args.dry_run {
        return Ok(WorkflowResult::Planned {
            milestone: selected,
        });
    }

    let assigned = tracker
        .assign_milestone(target.number, selected.number)?
        .unwrap_or(selected);

    Ok(WorkflowResult::Assigned {
        milestone: assigned,
    })
}
