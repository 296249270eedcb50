use std::fmt;

use crate::domain::TargetKind;

/// Non-fatal conditions met while choosing a milestone.
/// These are reported to the step log but do not fail the step.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The target already has a milestone and overwriting is disabled
    MilestoneExists {
        kind: TargetKind,
        number: u64,
        title: String,
    },
    /// Milestones whose titles are not version labels and were ignored
    UnmatchedTitles { titles: Vec<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MilestoneExists {
                kind,
                number,
                title,
            } => write!(
                f,
                "A milestone exists on {} #{} ('{}'). Do nothing.",
                kind, number, title
            ),
            BoundaryWarning::UnmatchedTitles { titles } => {
                let quoted: Vec<String> = titles.iter().map(|t| format!("'{}'", t)).collect();
                write!(
                    f,
                    "Ignored {} milestone(s) without a version title: {}",
                    titles.len(),
                    quoted.join(", ")
                )
            }
        }
    }
}
