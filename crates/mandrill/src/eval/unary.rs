//! Prefix operation evaluation

use crate::ast::{Expression, PrefixOperator};
use crate::value::{type_name, Value, FALSE, TRUE};
use crate::{Environment, EvalContext};

use super::{propagate, Evaluate};

/// Evaluate `<op><operand>`.
pub(crate) fn eval_prefix(
    operator: PrefixOperator,
    operand: &Expression,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Value {
    let operand = propagate!(operand.eval(env, ctx));

    match operator {
        PrefixOperator::Bang => eval_bang(&operand),
        PrefixOperator::Minus => eval_neg(operand),
    }
}

/// Evaluate logical NOT (`!x`).
///
/// Only `false` and `null` negate to `true`; every other value counts as
/// truthy here, integers included.
pub(crate) fn eval_bang(operand: &Value) -> Value {
    match operand {
        Value::Null => TRUE,
        Value::Boolean(b) => Value::from(!b),
        _ => FALSE,
    }
}

/// Evaluate unary negation (`-x`).
pub(crate) fn eval_neg(operand: Value) -> Value {
    match operand {
        Value::Integer(n) => n
            .checked_neg()
            .map(Value::Integer)
            .unwrap_or_else(|| Value::error(format!("integer overflow: -({})", n))),
        other => Value::error(format!("unknown operator: -{}", type_name(&other))),
    }
}
