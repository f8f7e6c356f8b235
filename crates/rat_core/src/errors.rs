//! Error set for construction, arithmetic, and parsing.

use thiserror::Error;

/// Every failure is a deterministic function of the input; nothing here is transient.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RationalError {
    /// Zero denominator at construction.
    #[error("invalid fraction: denominator is zero")]
    InvalidFraction,

    /// Divisor has value zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Input is not `<int>` or `<int>/<int>`, or a component is not an integer literal.
    #[error("cannot parse {input:?} as a rational: {reason}")]
    ParseError {
        input: String,
        reason: &'static str,
    },
}

impl RationalError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        RationalError::ParseError {
            input: input.to_string(),
            reason,
        }
    }
}

pub type RationalResult<T> = Result<T, RationalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            RationalError::InvalidFraction.to_string(),
            "invalid fraction: denominator is zero"
        );
        assert_eq!(RationalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            RationalError::parse("1/x", "bad digit").to_string(),
            "cannot parse \"1/x\" as a rational: bad digit"
        );
    }
}
