//! # Mandrill
//!
//! A small expression language with integers, booleans, `let` bindings,
//! `if`/`else` and `return`, run by a tree-walking interpreter.
//!
//! ## Architecture
//!
//! - **Lexer**: source text to [`Token`]s, through the [`TokenSource`] trait
//! - **Parser**: Pratt parser from tokens to an [`ast::Program`], collecting
//!   [`ParseError`]s instead of stopping at the first one
//! - **Evaluator**: walks the tree against an [`Environment`]; runtime
//!   errors are [`Value::Error`] values, not Rust errors
//!
//! ## Example
//!
//! ```
//! use mandrill::{run, Environment, Value};
//!
//! let mut env = Environment::new();
//! run("let a = 5; let b = a * 2;", &mut env).unwrap();
//!
//! assert_eq!(run("b + a", &mut env).unwrap(), Value::Integer(15));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

use tracing::debug;

// Re-export main types
pub use ast::Program;
pub use context::{EvalContext, DEFAULT_MAX_DEPTH};
pub use environment::Environment;
pub use error::{MandrillError, Result};
pub use eval::{eval_expr, eval_program, Evaluate, Evaluator};
pub use lexer::Lexer;
pub use parser::{ParseError, ParseErrors, Parser, Precedence, MAX_NESTING_DEPTH};
pub use token::{Span, Token, TokenBuffer, TokenKind, TokenSource};
pub use value::{Value, FALSE, NULL, TRUE};

/// Mandrill version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse source text into a program.
///
/// # Errors
///
/// Returns every syntax error found if there was at least one.
pub fn parse(source: &str) -> std::result::Result<Program, ParseErrors> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}

/// Parse and evaluate source text against `env` with default settings.
///
/// # Errors
///
/// Returns [`MandrillError::Parse`] without evaluating anything if the
/// source has syntax errors, and [`MandrillError::Runtime`] if evaluation
/// produced an error value.
pub fn run(source: &str, env: &mut Environment) -> Result<Value> {
    run_with(&Evaluator::new(), source, env)
}

/// Like [`run`], with an explicit evaluator.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(evaluator: &Evaluator, source: &str, env: &mut Environment) -> Result<Value> {
    let program = parse(source)?;
    debug!(statements = program.statements.len(), "parsed");

    match evaluator.eval(&program, env) {
        Value::Error(message) => Err(MandrillError::Runtime { message }),
        value => Ok(value),
    }
}
