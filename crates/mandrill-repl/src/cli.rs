//! Command-line arguments and logging setup

use std::path::PathBuf;

use clap::Parser;
use mandrill::{EvalContext, DEFAULT_MAX_DEPTH};

/// Run Mandrill scripts, or start an interactive session when no script is
/// given.
#[derive(Parser, Debug)]
#[command(name = "mandrill")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Script file to run
    #[arg(value_name = "FILE", conflicts_with = "eval")]
    pub script: Option<PathBuf>,

    /// Evaluate this source text and print the result
    #[arg(short, long, value_name = "SOURCE")]
    pub eval: Option<String>,

    /// Maximum evaluation depth before a program is stopped
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log filter, e.g. `debug` or `mandrill=trace` (overrides RUST_LOG)
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    /// Evaluation settings from the flags.
    pub fn eval_context(&self) -> EvalContext {
        EvalContext::with_max_depth(self.max_depth)
    }
}

/// Initialize tracing output on stderr.
///
/// `--log-level` wins over `RUST_LOG`; with neither, only warnings are
/// shown.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["mandrill"]);
        assert!(args.script.is_none());
        assert!(args.eval.is_none());
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_script_and_depth() {
        let args = Args::parse_from(["mandrill", "prog.mdl", "--max-depth", "50"]);
        assert_eq!(args.script, Some(PathBuf::from("prog.mdl")));
        assert_eq!(args.eval_context().max_depth, 50);
    }

    #[test]
    fn test_eval_flag() {
        let args = Args::parse_from(["mandrill", "-e", "1 + 2"]);
        assert_eq!(args.eval.as_deref(), Some("1 + 2"));
    }

    #[test]
    fn test_script_conflicts_with_eval() {
        assert!(Args::try_parse_from(["mandrill", "prog.mdl", "-e", "1"]).is_err());
    }
}
