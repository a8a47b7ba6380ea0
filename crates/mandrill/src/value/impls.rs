//! Value trait implementations: constructors, predicates, extractors, From traits

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create an error value
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Wrap a value in a return signal
    pub fn return_value(value: Value) -> Self {
        Value::ReturnValue(Box::new(value))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value must stop evaluation of the enclosing sequence
    /// (an error or a return signal)
    pub fn is_signal(&self) -> bool {
        matches!(self, Value::Error(_) | Value::ReturnValue(_))
    }

    /// Truthiness in a conditional context.
    ///
    /// `null`, `false` and `0` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::ReturnValue(_) | Value::Error(_) => true,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract error message
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Value::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Strip a return signal, leaving any other value as is.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::ReturnValue(inner) => *inner,
            other => other,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    /// Always one of the shared [`TRUE`]/[`FALSE`] constants.
    fn from(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        NULL
    }
}
