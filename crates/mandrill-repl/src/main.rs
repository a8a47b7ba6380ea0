//! `mandrill` command-line entry point

mod cli;
mod repl;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mandrill::{run_with, Environment, Evaluator};
use tracing::info;

use cli::Args;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    cli::init_tracing(args.log_level.as_deref());

    let source = match (&args.script, &args.eval) {
        (Some(path), _) => {
            info!(path = %path.display(), "running script");
            fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?
        }
        (None, Some(source)) => source.clone(),
        (None, None) => {
            repl::run(args.eval_context())?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let evaluator = Evaluator::with_context(args.eval_context());
    let mut env = Environment::new();
    let result = run_with(&evaluator, &source, &mut env);
    let failed = result.is_err();

    let output = repl::render(result);
    if failed {
        eprintln!("{}", output);
        Ok(ExitCode::FAILURE)
    } else {
        println!("{}", output);
        Ok(ExitCode::SUCCESS)
    }
}
