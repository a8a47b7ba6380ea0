//! Error types for running Mandrill source

use thiserror::Error;

use crate::parser::ParseErrors;

/// Main error type for Mandrill operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MandrillError {
    /// The source had syntax errors and was not evaluated
    #[error("{0}")]
    Parse(#[from] ParseErrors),

    /// Evaluation produced an error value
    #[error("{message}")]
    Runtime {
        /// The error value's message
        message: String,
    },
}

impl MandrillError {
    /// Create a runtime error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// Check if this is a syntax error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Result type alias for Mandrill operations
pub type Result<T> = std::result::Result<T, MandrillError>;
