// crates/rat_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, tracing, and the
// four subcommands (normalize, eval, range, demo).

mod args;
mod demo;
mod output;

mod exitcodes {
    /// Stable exit codes (scripts/tests rely on these)
    pub const OK: u8 = 0;
    pub const MISMATCH: u8 = 1;
    pub const VALIDATION: u8 = 2;
    pub const ARITHMETIC: u8 = 3;
}

use std::io::IsTerminal;
use std::process::ExitCode;

use rat_core::{Rational, RationalError};

use args::{parse_and_validate as parse_cli, Args, Command, Op};
use output::{emit, EvalOutput, NormalizeOutput, RangeOutput};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Malformed values or output failures
    Validation(String),
    /// Zero denominators and division by zero
    Arithmetic(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) | MainError::Arithmetic(m) => f.write_str(m),
        }
    }
}

impl From<RationalError> for MainError {
    fn from(e: RationalError) -> Self {
        match e {
            RationalError::InvalidFraction | RationalError::DivisionByZero => {
                MainError::Arithmetic(e.to_string())
            }
            RationalError::ParseError { .. } => MainError::Validation(e.to_string()),
        }
    }
}

/// Whether a predicate-style command held.
enum Verdict {
    Pass,
    Fail,
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("rat: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION);
        }
    };

    init_tracing(args.effective_log_level());

    let rc = match run(&args) {
        Ok(Verdict::Pass) => exitcodes::OK,
        Ok(Verdict::Fail) => exitcodes::MISMATCH,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("rat: error: {e}");
            map_error(&e)
        }
    };

    ExitCode::from(rc)
}

fn init_tracing(level: tracing::Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("rat: warning: tracing subscriber already installed");
    }
}

fn map_error(e: &MainError) -> u8 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Arithmetic(_) => ARITHMETIC,
    }
}

fn parse_value(s: &str) -> Result<Rational, MainError> {
    let v = Rational::parse(s)?;
    tracing::debug!(input = s, canonical = %v, "parsed");
    Ok(v)
}

fn run(args: &Args) -> Result<Verdict, MainError> {
    match &args.command {
        Command::Normalize { value } => {
            let v = parse_value(value)?;
            emit(&NormalizeOutput::new(value, v), args.json).map_err(MainError::Validation)?;
            Ok(Verdict::Pass)
        }
        Command::Eval { lhs, op, rhs, check } => {
            let out = eval(parse_value(lhs)?, *op, parse_value(rhs)?)?;
            emit(&out, args.json).map_err(MainError::Validation)?;
            Ok(verdict(*check, out.holds.unwrap_or(true)))
        }
        Command::Range { start, end, value, check } => {
            let range = parse_value(start)?.range_to(&parse_value(end)?);
            let value = parse_value(value)?;
            let contains = range.contains(&value);
            tracing::debug!(start = %range.start, end = %range.end, value = %value, contains, "range");
            emit(&RangeOutput { range, value, contains }, args.json).map_err(MainError::Validation)?;
            Ok(verdict(*check, contains))
        }
        Command::Demo => {
            let out = demo::run_demo()?;
            emit(&out, args.json).map_err(MainError::Validation)?;
            if !out.pass {
                tracing::warn!("demo: at least one check failed");
            }
            Ok(if out.pass { Verdict::Pass } else { Verdict::Fail })
        }
    }
}

fn verdict(check: bool, holds: bool) -> Verdict {
    if check && !holds {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}

fn eval(lhs: Rational, op: Op, rhs: Rational) -> Result<EvalOutput, MainError> {
    tracing::debug!(lhs = %lhs, op = %op, rhs = %rhs, "eval");
    let (value, holds) = match op {
        Op::Add => (Some(lhs.add(&rhs)), None),
        Op::Sub => (Some(lhs.subtract(&rhs)), None),
        Op::Mul => (Some(lhs.multiply(&rhs)), None),
        Op::Div => (Some(lhs.divide(&rhs)?), None),
        Op::Lt => (None, Some(lhs < rhs)),
        Op::Le => (None, Some(lhs <= rhs)),
        Op::Gt => (None, Some(lhs > rhs)),
        Op::Ge => (None, Some(lhs >= rhs)),
        Op::Eq => (None, Some(lhs == rhs)),
        Op::Ne => (None, Some(lhs != rhs)),
    };
    debug_assert_eq!(value.is_none(), op.is_comparison());
    Ok(EvalOutput { lhs, op: op.symbol(), rhs, value, holds })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn eval_arithmetic_and_comparison() {
        let out = eval(q("1/2"), Op::Add, q("1/3")).unwrap();
        assert_eq!(out.value, Some(q("5/6")));
        assert_eq!(out.holds, None);

        let out = eval(q("1/2"), Op::Lt, q("2/3")).unwrap();
        assert_eq!(out.value, None);
        assert_eq!(out.holds, Some(true));

        let out = eval(q("1/2"), Op::Eq, q("2/4")).unwrap();
        assert_eq!(out.holds, Some(true));
    }

    #[test]
    fn eval_division_by_zero_is_arithmetic() {
        let e = eval(q("1/2"), Op::Div, q("0")).unwrap_err();
        assert_eq!(map_error(&e), exitcodes::ARITHMETIC);
    }

    #[test]
    fn error_buckets() {
        assert_eq!(map_error(&MainError::from(RationalError::InvalidFraction)), exitcodes::ARITHMETIC);
        let e = parse_value("1/x").unwrap_err();
        assert_eq!(map_error(&e), exitcodes::VALIDATION);
    }

    #[test]
    fn verdict_only_fails_under_check() {
        assert!(matches!(verdict(false, false), Verdict::Pass));
        assert!(matches!(verdict(true, true), Verdict::Pass));
        assert!(matches!(verdict(true, false), Verdict::Fail));
    }
}
