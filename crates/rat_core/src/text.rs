//! Text form: `<int>` or `<int>/<int>`, each `-?[0-9]+`.
//!
//! Formatting prints the stored canonical fields as-is; it never reduces.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;

use crate::errors::RationalError;
use crate::rational::Rational;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.numerator())?;
        if !self.is_integer() {
            write!(f, "/{}", self.denominator())?;
        }
        Ok(())
    }
}

/// Strict shape check for one integer component: optional `-`, then digits.
fn is_int_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_component(part: &str, input: &str) -> Result<BigInt, RationalError> {
    if part.is_empty() {
        return Err(RationalError::parse(input, "empty component"));
    }
    if !is_int_literal(part) {
        return Err(RationalError::parse(input, "component is not an integer literal"));
    }
    part.parse::<BigInt>()
        .map_err(|_| RationalError::parse(input, "component is not an integer literal"))
}

impl Rational {
    /// Parse `"n"` or `"n/d"`. A well-formed `"n/0"` fails with `InvalidFraction`.
    pub fn parse(s: &str) -> Result<Self, RationalError> {
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => {
                if d.contains('/') {
                    return Err(RationalError::parse(s, "more than one '/'"));
                }
                (parse_component(n, s)?, parse_component(d, s)?)
            }
            None => (parse_component(s, s)?, BigInt::from(1)),
        };
        Rational::new(num, den)
    }
}

impl FromStr for Rational {
    type Err = RationalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::parse(s)
    }
}
