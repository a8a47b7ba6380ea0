//! Tree-walking evaluation
//!
//! Runtime errors are values, not `Err`s: an [`Value::Error`] (or a
//! [`Value::ReturnValue`]) coming back from a sub-evaluation is handed
//! straight up to the caller without further interpretation.

pub mod binary;
pub mod if_expr;
pub mod path;
pub mod stmt;
pub mod unary;

use tracing::trace;

use crate::ast::{Expression, Program};
use crate::value::Value;
use crate::{Environment, EvalContext};

/// Return early from the enclosing function if `$value` is an error or a
/// return signal; otherwise evaluate to it.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_signal() {
            return value;
        }
        value
    }};
}
pub(crate) use propagate;

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
/// Every AST node type implements it.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Value;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expression {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Value {
        let Some(_guard) = ctx.enter() else {
            return depth_exceeded(ctx);
        };
        trace!(kind = expr_kind_name(self), depth = ctx.depth(), "eval");

        match self {
            Expression::Integer(n) => Value::Integer(*n),
            Expression::Boolean(b) => Value::from(*b),
            Expression::Identifier(ident) => path::eval_identifier(ident, env),
            Expression::Prefix { operator, operand } => {
                unary::eval_prefix(*operator, operand, env, ctx)
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => binary::eval_infix(*operator, left, right, env, ctx),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => if_expr::eval_if(condition, consequence, alternative.as_ref(), env, ctx),
        }
    }
}

/// Get a human-readable name for an expression kind.
fn expr_kind_name(expr: &Expression) -> &'static str {
    match expr {
        Expression::Identifier(_) => "identifier",
        Expression::Integer(_) => "integer literal",
        Expression::Boolean(_) => "boolean literal",
        Expression::Prefix { .. } => "prefix expression",
        Expression::Infix { .. } => "infix expression",
        Expression::If { .. } => "if expression",
    }
}

/// The error produced when recursion passes `ctx.max_depth`.
pub(crate) fn depth_exceeded(ctx: &EvalContext) -> Value {
    Value::error(format!(
        "maximum evaluation depth exceeded: {}",
        ctx.max_depth
    ))
}

// ═══════════════════════════════════════════════════════════════════════
// Evaluator
// ═══════════════════════════════════════════════════════════════════════

/// Entry point pairing an [`EvalContext`] with the [`Evaluate`] dispatch.
///
/// # Example
///
/// ```
/// use mandrill::{parse, Environment, Evaluator, Value};
///
/// let program = parse("let x = 6; x * 7").unwrap();
/// let mut env = Environment::new();
///
/// let value = Evaluator::new().eval(&program, &mut env);
/// assert_eq!(value, Value::Integer(42));
/// assert_eq!(env.get("x"), Some(&Value::Integer(6)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    ctx: EvalContext,
}

impl Evaluator {
    /// Create an evaluator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self { ctx }
    }

    /// The evaluation settings in use.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Evaluate any AST node against `env`.
    ///
    /// Only a [`Program`] unwraps return signals; evaluating a bare block
    /// or statement can hand back a [`Value::ReturnValue`].
    pub fn eval<N: Evaluate + ?Sized>(&self, node: &N, env: &mut Environment) -> Value {
        node.eval(env, &self.ctx)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expression, env: &mut Environment, ctx: &EvalContext) -> Value {
    expr.eval(env, ctx)
}

/// Evaluate a whole program with default settings.
pub fn eval_program(program: &Program, env: &mut Environment) -> Value {
    Evaluator::new().eval(program, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrefixOperator;

    #[test]
    fn test_literals() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();
        assert_eq!(Expression::Integer(5).eval(&mut env, &ctx), Value::Integer(5));
        assert_eq!(Expression::Boolean(true).eval(&mut env, &ctx), crate::value::TRUE);
    }

    #[test]
    fn test_depth_limit() {
        let mut expr = Expression::Integer(1);
        for _ in 0..20 {
            expr = Expression::prefix(PrefixOperator::Minus, expr);
        }
        let mut env = Environment::new();
        let ctx = EvalContext::with_max_depth(10);

        assert_eq!(
            expr.eval(&mut env, &ctx),
            Value::error("maximum evaluation depth exceeded: 10")
        );
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_depth_within_limit() {
        let mut expr = Expression::Integer(1);
        for _ in 0..20 {
            expr = Expression::prefix(PrefixOperator::Minus, expr);
        }
        let mut env = Environment::new();
        let ctx = EvalContext::with_max_depth(21);

        assert_eq!(expr.eval(&mut env, &ctx), Value::Integer(1));
    }

    #[test]
    fn test_expr_kind_names() {
        assert_eq!(expr_kind_name(&Expression::ident("x")), "identifier");
        assert_eq!(expr_kind_name(&Expression::Integer(1)), "integer literal");
    }
}
