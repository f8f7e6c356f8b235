// crates/rat_cli/src/args.rs
//
// CLI argument surface (types + validation).
//
// Rules:
// - Values stay raw strings here; main.rs parses them so that construction
//   errors keep their own exit code.
// - Positional values may start with '-' (negative rationals, the '-' operator).
// - `--quiet` forces the log level to ERROR and conflicts with a verbose --log-level.
// - `--json` needs the `json` feature.

use std::fmt;

use clap::{Parser, Subcommand};

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "rat",
    disable_help_subcommand = true,
    about = "Exact rational arithmetic from the command line"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Emit a single JSON object instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress log output below ERROR.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level for stderr diagnostics (error, warn, info, debug, trace). Default: warn.
    #[arg(long, global = true, value_parser = parse_level)]
    pub log_level: Option<tracing::Level>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Parse a value and print its canonical form.
    Normalize {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Apply an arithmetic operator (+ - * /) or a comparison (< <= > >= == !=).
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_op)]
        op: Op,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// Exit with status 1 when a comparison does not hold.
        #[arg(long)]
        check: bool,
    },

    /// Test whether VALUE lies in the closed range [START, END].
    Range {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Exit with status 1 when VALUE is outside the range.
        #[arg(long)]
        check: bool,
    },

    /// Run the built-in example checks.
    Demo,
}

/// Binary operators accepted by `eval`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Eq => "==",
            Op::Ne => "!=",
        }
    }

    /// Comparisons yield a boolean, arithmetic yields a value.
    pub fn is_comparison(self) -> bool {
        !matches!(self, Op::Add | Op::Sub | Op::Mul | Op::Div)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operator parser. `x` is accepted for `*` since shells glob a bare `*`.
pub fn parse_op(s: &str) -> Result<Op, String> {
    Ok(match s.trim() {
        "+" => Op::Add,
        "-" => Op::Sub,
        "*" | "x" => Op::Mul,
        "/" => Op::Div,
        "<" => Op::Lt,
        "<=" => Op::Le,
        ">" => Op::Gt,
        ">=" => Op::Ge,
        "==" => Op::Eq,
        "!=" => Op::Ne,
        other => return Err(format!("unknown operator '{other}'")),
    })
}

/// Level parser (case-insensitive names only, no numeric levels).
pub fn parse_level(s: &str) -> Result<tracing::Level, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(tracing::Level::ERROR),
        "warn" => Ok(tracing::Level::WARN),
        "info" => Ok(tracing::Level::INFO),
        "debug" => Ok(tracing::Level::DEBUG),
        "trace" => Ok(tracing::Level::TRACE),
        other => Err(format!("unknown log level '{other}'")),
    }
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    BadCombo(&'static str),
    FeatureDisabled(&'static str),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CliError::*;
        match self {
            BadCombo(s) => write!(f, "invalid flag combination: {s}"),
            FeatureDisabled(s) => write!(f, "feature not enabled in this build: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

impl Args {
    /// Level handed to the subscriber.
    pub fn effective_log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else {
            self.log_level.unwrap_or(tracing::Level::WARN)
        }
    }
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

fn validate(args: Args) -> Result<Args, CliError> {
    if args.quiet && args.log_level.is_some_and(|l| l > tracing::Level::WARN) {
        return Err(CliError::BadCombo("--quiet with a verbose --log-level"));
    }
    if args.json && !cfg!(feature = "json") {
        return Err(CliError::FeatureDisabled("json"));
    }
    Ok(args)
}
