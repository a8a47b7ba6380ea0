//! Infix operation evaluation

use crate::ast::{Expression, InfixOperator};
use crate::value::{type_name, Value};
use crate::{Environment, EvalContext};

use super::{propagate, Evaluate};

/// Evaluate `<left> <op> <right>`, left operand first.
pub(crate) fn eval_infix(
    operator: InfixOperator,
    left: &Expression,
    right: &Expression,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Value {
    let left = propagate!(left.eval(env, ctx));
    let right = propagate!(right.eval(env, ctx));

    eval_infix_values(operator, &left, &right)
}

/// Apply an infix operator to two already-evaluated operands.
pub fn eval_infix_values(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            InfixOperator::Eq => Value::from(l == r),
            InfixOperator::NotEq => Value::from(l != r),
            _ => unknown_operator(operator, left, right),
        },
        _ if type_name(left) != type_name(right) => Value::error(format!(
            "type mismatch: {} {} {}",
            type_name(left),
            operator,
            type_name(right)
        )),
        _ => unknown_operator(operator, left, right),
    }
}

fn unknown_operator(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    Value::error(format!(
        "unknown operator: {} {} {}",
        type_name(left),
        operator,
        type_name(right)
    ))
}

// ═══════════════════════════════════════════════════════════════════════
// Integer Arithmetic and Comparison
// ═══════════════════════════════════════════════════════════════════════

fn eval_integer_infix(operator: InfixOperator, l: i64, r: i64) -> Value {
    match operator {
        InfixOperator::Plus => checked(l.checked_add(r), operator, l, r),
        InfixOperator::Minus => checked(l.checked_sub(r), operator, l, r),
        InfixOperator::Asterisk => checked(l.checked_mul(r), operator, l, r),
        InfixOperator::Slash => {
            if r == 0 {
                return Value::error(format!("division by zero: {} / 0", l));
            }
            // Truncates toward zero; only i64::MIN / -1 can overflow.
            checked(l.checked_div(r), operator, l, r)
        }
        InfixOperator::Lt => Value::from(l < r),
        InfixOperator::Gt => Value::from(l > r),
        InfixOperator::Eq => Value::from(l == r),
        InfixOperator::NotEq => Value::from(l != r),
    }
}

fn checked(result: Option<i64>, operator: InfixOperator, l: i64, r: i64) -> Value {
    match result {
        Some(n) => Value::Integer(n),
        None => Value::error(format!("integer overflow: {} {} {}", l, operator, r)),
    }
}
