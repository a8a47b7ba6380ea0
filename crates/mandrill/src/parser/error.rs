//! Syntax diagnostics

use std::fmt;

use thiserror::Error;

use crate::token::Span;

/// A single syntax error recorded while parsing.
///
/// Parsing never stops at the first problem; each one becomes a
/// `ParseError` and the parser keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}{}", location_suffix(.location))]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Position of the offending token, when known
    pub location: Option<Span>,
}

fn location_suffix(location: &Option<Span>) -> String {
    location
        .map(|span| format!(" (at {})", span))
        .unwrap_or_default()
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: Span) -> Self {
        self.location = Some(location);
        self
    }
}

/// Every syntax error from one parse, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }

    /// Just the messages, without locations.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl From<Vec<ParseError>> for ParseErrors {
    fn from(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
