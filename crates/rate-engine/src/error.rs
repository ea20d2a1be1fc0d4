//! Error types for rate-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    /// A raw rate record failed validation. The payload is the full message.
    #[error("{0}")]
    Validation(String),

    #[error("Start date time must be before end date time")]
    InvalidRange,

    #[error("Time zones of start and end times must be consistent")]
    InconsistentTimezone,

    #[error("Start and end date times are required")]
    MissingTimestamp,

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid rates document: {0}")]
    Document(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RateError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RateError>;
