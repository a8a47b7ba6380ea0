//! Interactive session

use anyhow::Result;
use mandrill::{run_with, Environment, EvalContext, Evaluator, MandrillError, Value};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

const PROMPT: &str = ">> ";

const HELP: &str = "\
Commands:
  :env       list current bindings
  :help      show this message
  :quit, :q  leave the session

Anything else is evaluated as Mandrill source.";

/// A line of input, classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Nothing but whitespace
    Empty,
    /// `:env`
    Env,
    /// `:help`
    Help,
    /// `:quit` or `:q`
    Quit,
    /// An unrecognized `:` command
    UnknownCommand(&'a str),
    /// Source to evaluate
    Source(&'a str),
}

impl<'a> Input<'a> {
    /// Classify a raw input line.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => Input::Empty,
            ":env" => Input::Env,
            ":help" => Input::Help,
            ":quit" | ":q" => Input::Quit,
            cmd if cmd.starts_with(':') => Input::UnknownCommand(cmd),
            source => Input::Source(source),
        }
    }
}

/// One environment shared by every line of a session.
pub struct Session {
    env: Environment,
    evaluator: Evaluator,
}

impl Session {
    /// Create a session with an empty environment.
    pub fn new(ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            evaluator: Evaluator::with_context(ctx),
        }
    }

    /// The session's bindings.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate source text, returning the text to show the user.
    ///
    /// Syntax errors are listed one per line and nothing is evaluated.
    pub fn eval(&mut self, source: &str) -> String {
        render(run_with(&self.evaluator, source, &mut self.env))
    }

    /// Current bindings as `name = value` lines, outermost scope first.
    pub fn describe_env(&self) -> String {
        if self.env.is_empty() {
            return "(no bindings)".to_string();
        }
        self.env
            .names()
            .into_iter()
            .filter_map(|name| self.env.get(name).map(|value| format!("{} = {}", name, value)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Text for the outcome of one evaluation.
pub fn render(result: mandrill::Result<Value>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(MandrillError::Parse(errors)) => errors
            .iter()
            .map(|err| format!("syntax error: {}", err))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(MandrillError::Runtime { message }) => Value::Error(message).to_string(),
    }
}

/// Read-eval-print until `:quit` or end of input.
pub fn run(ctx: EvalContext) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new(ctx);

    println!("Mandrill {}. Type :help for commands.", mandrill::VERSION);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            // Ctrl-C drops the current line
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        match Input::parse(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Env => println!("{}", session.describe_env()),
            Input::UnknownCommand(cmd) => {
                println!("unknown command {}, try :help", cmd)
            }
            Input::Source(source) => {
                editor.add_history_entry(source)?;
                println!("{}", session.eval(source));
            }
        }
    }

    debug!(bindings = session.env().len(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(EvalContext::default())
    }

    #[test]
    fn test_input_classification() {
        assert_eq!(Input::parse("   "), Input::Empty);
        assert_eq!(Input::parse(":env"), Input::Env);
        assert_eq!(Input::parse(" :q "), Input::Quit);
        assert_eq!(Input::parse(":quit"), Input::Quit);
        assert_eq!(Input::parse(":help"), Input::Help);
        assert_eq!(Input::parse(":what"), Input::UnknownCommand(":what"));
        assert_eq!(Input::parse(" 1 + 2 "), Input::Source("1 + 2"));
    }

    #[test]
    fn test_bindings_persist_across_lines() {
        let mut session = session();
        assert_eq!(session.eval("let a = 5;"), "5");
        assert_eq!(session.eval("let b = a * 2;"), "10");
        assert_eq!(session.eval("b + a"), "15");
    }

    #[test]
    fn test_null_result() {
        assert_eq!(session().eval("if (false) { 10 }"), "null");
    }

    #[test]
    fn test_runtime_error_rendering() {
        assert_eq!(
            session().eval("5 + true;"),
            "ERROR: type mismatch: INTEGER + BOOLEAN"
        );
    }

    #[test]
    fn test_syntax_errors_one_per_line() {
        let mut session = session();
        assert_eq!(
            session.eval("let x 5; let y 6;"),
            "syntax error: expected next token to be =, got INT instead (at 1:7)\n\
             syntax error: expected next token to be =, got INT instead (at 1:16)"
        );
        assert!(session.env().is_empty());
    }

    #[test]
    fn test_describe_env() {
        let mut session = session();
        assert_eq!(session.describe_env(), "(no bindings)");
        session.eval("let x = 1; let y = x > 0;");
        assert_eq!(session.describe_env(), "x = 1\ny = true");
    }
}
