//! Explicit constructors from machine and big integers.

use num_bigint::BigInt;

use crate::errors::RationalError;
use crate::rational::Rational;

/// `n.div_by(d)` builds the canonical `n/d`.
pub trait DivBy<Rhs = Self> {
    fn div_by(self, denominator: Rhs) -> Result<Rational, RationalError>;
}

macro_rules! def_div_by {
    ($($t:ty),*) => {
        $(
            impl DivBy for $t {
                #[inline]
                fn div_by(self, denominator: $t) -> Result<Rational, RationalError> {
                    Rational::new(BigInt::from(self), BigInt::from(denominator))
                }
            }

            impl From<$t> for Rational {
                #[inline]
                fn from(n: $t) -> Self {
                    Rational::from_integer(BigInt::from(n))
                }
            }
        )*
    }
}

def_div_by!(i32, i64, u32, u64);

impl DivBy for BigInt {
    #[inline]
    fn div_by(self, denominator: BigInt) -> Result<Rational, RationalError> {
        Rational::new(self, denominator)
    }
}

impl<'a, 'b> DivBy<&'b BigInt> for &'a BigInt {
    #[inline]
    fn div_by(self, denominator: &'b BigInt) -> Result<Rational, RationalError> {
        Rational::new(self.clone(), denominator.clone())
    }
}

impl From<BigInt> for Rational {
    #[inline]
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}
