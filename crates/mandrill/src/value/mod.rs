//! Value representation for runtime values

mod display;
mod impls;

/// Runtime value produced by the evaluator.
///
/// `ReturnValue` and `Error` are control-flow carriers: they unwind the
/// recursive walk and never reach user code as ordinary values. Evaluating
/// a [`Program`](crate::ast::Program) unwraps `ReturnValue`, so only
/// `Error` can surface from a whole program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// `true` or `false`
    Boolean(bool),

    /// Absence of a value (an `if` with no taken branch, an empty block)
    Null,

    /// A `return` unwinding towards the enclosing program
    ReturnValue(Box<Value>),

    /// A runtime error unwinding to the top
    Error(String),
}

/// Shared `true`.
pub const TRUE: Value = Value::Boolean(true);

/// Shared `false`.
pub const FALSE: Value = Value::Boolean(false);

/// Shared `null`.
pub const NULL: Value = Value::Null;

/// Type name of a value as it appears in runtime error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "INTEGER",
        Value::Boolean(_) => "BOOLEAN",
        Value::Null => "NULL",
        Value::ReturnValue(_) => "RETURN_VALUE",
        Value::Error(_) => "ERROR",
    }
}
