//! Display implementation for Value

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::ReturnValue(inner) => write!(f, "{}", inner),
            Value::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}
