//! Command outputs: one struct per subcommand, rendered as text or JSON.
//!
//! Text mode prints just the answer (a canonical value or `true`/`false`);
//! JSON mode prints the whole struct with values in canonical string form.

use std::fmt;

use rat_core::{Rational, RationalRange};

#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct NormalizeOutput {
    pub input: String,
    pub value: Rational,
    pub numerator: String,
    pub denominator: String,
    pub negative: bool,
}

impl NormalizeOutput {
    pub fn new(input: &str, value: Rational) -> Self {
        Self {
            input: input.to_string(),
            numerator: value.numerator().to_string(),
            denominator: value.denominator().to_string(),
            negative: value.is_negative(),
            value,
        }
    }
}

impl fmt::Display for NormalizeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct EvalOutput {
    pub lhs: Rational,
    pub op: &'static str,
    pub rhs: Rational,
    /// Set for arithmetic operators.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<Rational>,
    /// Set for comparisons.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub holds: Option<bool>,
}

impl fmt::Display for EvalOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.holds) {
            (Some(v), _) => write!(f, "{v}"),
            (None, Some(b)) => write!(f, "{b}"),
            (None, None) => Ok(()),
        }
    }
}

#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct RangeOutput {
    pub range: RationalRange,
    pub value: Rational,
    pub contains: bool,
}

impl fmt::Display for RangeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contains)
    }
}

#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct DemoCheck {
    pub name: &'static str,
    pub pass: bool,
}

#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct DemoOutput {
    pub checks: Vec<DemoCheck>,
    pub pass: bool,
}

impl fmt::Display for DemoOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.checks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", c.pass)?;
        }
        Ok(())
    }
}

/// Print `out` to stdout in the selected mode.
#[cfg(feature = "json")]
pub fn emit<T: fmt::Display + serde::Serialize>(out: &T, json: bool) -> Result<(), String> {
    if json {
        let s = serde_json::to_string(out).map_err(|e| format!("json: {e}"))?;
        println!("{s}");
    } else {
        println!("{out}");
    }
    Ok(())
}

#[cfg(not(feature = "json"))]
pub fn emit<T: fmt::Display>(out: &T, json: bool) -> Result<(), String> {
    if json {
        return Err("json output not enabled (build with feature `json`)".into());
    }
    println!("{out}");
    Ok(())
}
