pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod tracker;
pub mod ui;

pub use error::{AutoMilestoneError, Result};
