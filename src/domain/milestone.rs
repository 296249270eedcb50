use serde::{Deserialize, Serialize};

use crate::domain::version::{compare, ParsedVersion, VersionParser};
use crate::error::{AutoMilestoneError, Result};

/// Milestone as returned by the issue tracker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Milestone {
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Milestone {
            number,
            title: title.into(),
            state: None,
            description: None,
        }
    }
}

/// A milestone paired with the version parsed from its title
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedMilestone<'a> {
    pub milestone: &'a Milestone,
    pub version: ParsedVersion,
}

/// Picks the milestone with the highest version label
#[derive(Debug, Clone)]
pub struct MilestoneSelector {
    parser: VersionParser,
}

impl MilestoneSelector {
    pub fn new(parser: VersionParser) -> Self {
        MilestoneSelector { parser }
    }

    pub fn parser(&self) -> &VersionParser {
        &self.parser
    }

    /// Parses every title once and splits the milestones into version
    /// labels and the rest.
    ///
    /// Matched milestones are in ascending version order. The sort is
    /// stable, so milestones with equal versions keep their input order.
    pub fn select<'a>(&self, milestones: &'a [Milestone]) -> Selection<'a> {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for milestone in milestones {
            match self.parser.parse(&milestone.title) {
                Some(version) => matched.push(MatchedMilestone { milestone, version }),
                None => unmatched.push(milestone),
            }
        }

        matched.sort_by(|a, b| compare(&a.version, &b.version));
        Selection { matched, unmatched }
    }

    /// Returns every milestone whose title parses, in ascending version order.
    ///
    /// Titles that do not parse are dropped without error.
    pub fn matches<'a>(&self, milestones: &'a [Milestone]) -> Vec<MatchedMilestone<'a>> {
        self.select(milestones).matched
    }

    /// Selects the milestone with the maximum version.
    ///
    /// On ties the milestone listed last in `milestones` wins.
    ///
    /// # Returns
    /// * `Ok(MatchedMilestone)` - The highest versioned milestone
    /// * `Err(NoMatchedMilestones)` - If no title parses as a version
    pub fn select_best<'a>(&self, milestones: &'a [Milestone]) -> Result<MatchedMilestone<'a>> {
        self.select(milestones)
            .matched
            .pop()
            .ok_or(AutoMilestoneError::NoMatchedMilestones)
    }
}

/// Outcome of parsing one list of milestones
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Version milestones, lowest version first
    pub matched: Vec<MatchedMilestone<'a>>,
    /// Milestones whose titles are not version labels, in input order
    pub unmatched: Vec<&'a Milestone>,
}

impl<'a> Selection<'a> {
    /// The highest versioned milestone; the later one on ties.
    pub fn best(&self) -> Result<&MatchedMilestone<'a>> {
        self.matched
            .last()
            .ok_or(AutoMilestoneError::NoMatchedMilestones)
    }
}
