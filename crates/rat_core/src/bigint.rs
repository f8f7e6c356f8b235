//! Thin helpers over the `num-bigint` integer capability.
//!
//! Only magnitudes enter `gcd`; signs are handled by the caller.

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_traits::Zero;

use crate::rational::Sign;

/// Greatest common divisor of two magnitudes (Euclid, iterative).
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Rebuild a signed integer from a sign and a magnitude.
#[inline]
pub(crate) fn signed(sign: Sign, magnitude: &BigUint) -> BigInt {
    let s = match sign {
        Sign::Positive => BigSign::Plus,
        Sign::Negative => BigSign::Minus,
    };
    // `from_biguint` maps a zero magnitude to NoSign regardless of `s`.
    BigInt::from_biguint(s, magnitude.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(&u(12), &u(18)), u(6));
        assert_eq!(gcd(&u(18), &u(12)), u(6));
        assert_eq!(gcd(&u(17), &u(5)), u(1));
        assert_eq!(gcd(&u(9), &u(0)), u(9));
        assert_eq!(gcd(&u(0), &u(9)), u(9));
        assert_eq!(gcd(&u(0), &u(0)), u(0));
    }

    #[test]
    fn gcd_large() {
        let big: BigUint = "912016490186296920119201192141970416029".parse().unwrap();
        let twice = &big * 2u32;
        assert_eq!(gcd(&big, &twice), big);
    }

    #[test]
    fn signed_zero_has_no_sign() {
        assert!(signed(Sign::Negative, &u(0)).is_zero());
        assert_eq!(signed(Sign::Negative, &u(3)), BigInt::from(-3));
        assert_eq!(signed(Sign::Positive, &u(3)), BigInt::from(3));
    }
}
