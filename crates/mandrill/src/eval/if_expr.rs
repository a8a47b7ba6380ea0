//! If expression evaluation

use crate::ast::{BlockStatement, Expression};
use crate::value::{Value, NULL};
use crate::{Environment, EvalContext};

use super::{propagate, Evaluate};

/// Evaluate `if (<condition>) <consequence> [else <alternative>]`.
///
/// Without an alternative, a falsy condition yields `null`.
pub(crate) fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Value {
    let condition = propagate!(condition.eval(env, ctx));

    if condition.is_truthy() {
        consequence.eval(env, ctx)
    } else if let Some(alternative) = alternative {
        alternative.eval(env, ctx)
    } else {
        NULL
    }
}
