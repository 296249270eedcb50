//! Domain logic - version labels and milestone selection, independent of the tracker

pub mod event;
pub mod milestone;
pub mod version;

pub use event::{EventItem, EventPayload, Target, TargetKind};
pub use milestone::{MatchedMilestone, Milestone, MilestoneSelector, Selection};
pub use version::{compare, ParsedVersion, VersionParser};
