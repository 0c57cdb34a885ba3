//! Error types for rule configuration and occurrence generation.

use thiserror::Error;

/// All errors produced by recurrence.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum RecurrenceError {
    /// A rule, bound or date input was rejected. Nothing was mutated.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A search guard tripped before a rule produced an occurrence.
    #[error("internal error: {message}")]
    Internal { message: String },

    /// Calendar arithmetic left the range jiff can represent.
    #[error("calendar error: {0}")]
    Calendar(#[from] jiff::Error),
}

impl RecurrenceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for configuration errors the caller can fix and retry.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, RecurrenceError>;
