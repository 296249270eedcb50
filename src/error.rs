use thiserror::Error;

/// Unified error type for auto-milestone operations
#[derive(Error, Debug)]
pub enum AutoMilestoneError {
    #[error("No matched milestones.")]
    NoMatchedMilestones,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Step output error: {0}")]
    Output(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-milestone
pub type Result<T> = std::result::Result<T, AutoMilestoneError>;

impl AutoMilestoneError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoMilestoneError::Config(msg.into())
    }

    /// Create an event payload error with context
    pub fn event(msg: impl Into<String>) -> Self {
        AutoMilestoneError::Event(msg.into())
    }

    /// Create an API error from a response status and message
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        AutoMilestoneError::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a step output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        AutoMilestoneError::Output(msg.into())
    }
}
