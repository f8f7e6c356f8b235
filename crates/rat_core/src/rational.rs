//! The canonical rational value and its single normalizing constructor.

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_traits::{One, Zero};

use crate::bigint::{gcd, signed};
use crate::errors::RationalError;

/// Sign of a rational, carried apart from the magnitudes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// `+1` or `-1`.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// Exact fraction `sign * numerator / denominator` in canonical form.
///
/// Invariants, established by [`Rational::new`] and never broken afterwards:
/// - `denominator > 0`
/// - `gcd(numerator, denominator) == 1` (zero is stored as `0/1`)
/// - zero is always [`Sign::Positive`]
///
/// Because the representation is unique, `==` compares fields directly.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rational {
    numerator: BigUint,
    denominator: BigUint,
    sign: Sign,
}

impl Rational {
    /// Build a canonical rational from a raw numerator/denominator pair.
    ///
    /// The denominator may be negative; a zero denominator is rejected with
    /// [`RationalError::InvalidFraction`].
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::InvalidFraction);
        }
        Ok(Self::from_raw(&numerator, &denominator))
    }

    /// Normalization path shared by the constructor and every operator.
    /// Caller guarantees `denominator != 0`.
    pub(crate) fn from_raw(numerator: &BigInt, denominator: &BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let n = numerator.magnitude();
        let d = denominator.magnitude();
        let factor = gcd(n, d);

        // n * d < 0 without forming the product; a zero numerator stays positive.
        let sign = match (numerator.sign(), denominator.sign()) {
            (BigSign::NoSign, _) => Sign::Positive,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        };

        let (numerator, denominator) = if factor > BigUint::one() {
            (n / &factor, d / &factor)
        } else {
            (n.clone(), d.clone())
        };

        Self {
            numerator,
            denominator,
            sign,
        }
    }

    /// Integer value `n/1`.
    pub fn from_integer(n: BigInt) -> Self {
        Self::from_raw(&n, &BigInt::one())
    }

    pub fn zero() -> Self {
        Self {
            numerator: BigUint::zero(),
            denominator: BigUint::one(),
            sign: Sign::Positive,
        }
    }

    pub fn one() -> Self {
        Self {
            numerator: BigUint::one(),
            denominator: BigUint::one(),
            sign: Sign::Positive,
        }
    }

    /// Reduced numerator magnitude.
    #[inline]
    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    /// Reduced denominator magnitude; always positive.
    #[inline]
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Numerator with the sign folded in (`sign * numerator`).
    #[inline]
    pub fn signed_numerator(&self) -> BigInt {
        signed(self.sign, &self.numerator)
    }

    /// Denominator as a signed integer, for mixed arithmetic.
    #[inline]
    pub(crate) fn signed_denominator(&self) -> BigInt {
        BigInt::from(self.denominator.clone())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}
