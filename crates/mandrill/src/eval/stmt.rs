//! Statement, block, and program evaluation

use tracing::debug;

use crate::ast::{BlockStatement, Program, Statement};
use crate::value::{Value, NULL};
use crate::{Environment, EvalContext};

use super::{depth_exceeded, propagate, Evaluate};

impl Evaluate for Statement {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Value {
        match self {
            // Expression statement: its value is the statement's value
            Statement::Expression(expr) => expr.eval(env, ctx),

            // Let binding: bind in the innermost scope, yield the value
            Statement::Let { name, value } => {
                let value = propagate!(value.eval(env, ctx));
                env.set(name.name.clone(), value)
            }

            Statement::Return { value } => {
                let value = propagate!(value.eval(env, ctx));
                Value::return_value(value)
            }

            Statement::Block(block) => block.eval(env, ctx),
        }
    }
}

impl Evaluate for BlockStatement {
    /// Evaluate statements in order, stopping at the first error or return
    /// signal. The signal is handed back still wrapped so enclosing blocks
    /// stop too.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Value {
        let Some(_guard) = ctx.enter() else {
            return depth_exceeded(ctx);
        };

        eval_statements(&self.statements, env, ctx)
    }
}

impl Evaluate for Program {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Value {
        debug!(statements = self.statements.len(), "evaluating program");

        let result = eval_statements(&self.statements, env, ctx).unwrap_return();

        if let Some(message) = result.as_error() {
            debug!(%message, "program failed");
        }
        result
    }
}

/// Evaluate a statement sequence, returning the last value or the first
/// signal encountered. An empty sequence yields `null`.
fn eval_statements(statements: &[Statement], env: &mut Environment, ctx: &EvalContext) -> Value {
    let mut result = NULL;
    for stmt in statements {
        result = propagate!(stmt.eval(env, ctx));
    }
    result
}
