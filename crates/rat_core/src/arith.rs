//! Arithmetic. Each operation forms a raw numerator/denominator and hands it
//! back to the normalizing constructor; nothing is reduced by hand here.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::errors::RationalError;
use crate::rational::Rational;

impl Rational {
    /// `n1'/d1 + n2'/d2 = (n1'*d2 + n2'*d1) / (d1*d2)`
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Rational) -> Rational {
        let (n1, d1) = (self.signed_numerator(), self.signed_denominator());
        let (n2, d2) = (other.signed_numerator(), other.signed_denominator());
        Rational::from_raw(&(&n1 * &d2 + &n2 * &d1), &(d1 * d2))
    }

    /// `n1'/d1 - n2'/d2 = (n1'*d2 - n2'*d1) / (d1*d2)`
    pub fn subtract(&self, other: &Rational) -> Rational {
        let (n1, d1) = (self.signed_numerator(), self.signed_denominator());
        let (n2, d2) = (other.signed_numerator(), other.signed_denominator());
        Rational::from_raw(&(&n1 * &d2 - &n2 * &d1), &(d1 * d2))
    }

    pub fn multiply(&self, other: &Rational) -> Rational {
        let n = self.signed_numerator() * other.signed_numerator();
        let d = self.signed_denominator() * other.signed_denominator();
        Rational::from_raw(&n, &d)
    }

    /// `(n1'*d2) / (d1*n2')`; fails when `other` is zero.
    pub fn divide(&self, other: &Rational) -> Result<Rational, RationalError> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let n = self.signed_numerator() * other.signed_denominator();
        let d = self.signed_denominator() * other.signed_numerator();
        Ok(Rational::from_raw(&n, &d))
    }

    pub fn negate(&self) -> Rational {
        Rational::from_raw(&-self.signed_numerator(), &self.signed_denominator())
    }
}

// Operator sugar over the named methods, for owned and borrowed operands.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $named:ident) => {
        impl<'a, 'b> $trait<&'b Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'b Rational) -> Rational {
                Rational::$named(self, rhs)
            }
        }

        impl<'b> $trait<&'b Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'b Rational) -> Rational {
                Rational::$named(&self, rhs)
            }
        }

        impl<'a> $trait<Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational::$named(self, &rhs)
            }
        }

        impl $trait<Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational::$named(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

// Division stays fallible: `(a / b)?`.
impl<'a, 'b> Div<&'b Rational> for &'a Rational {
    type Output = Result<Rational, RationalError>;
    #[inline]
    fn div(self, rhs: &'b Rational) -> Self::Output {
        self.divide(rhs)
    }
}

impl Div<Rational> for Rational {
    type Output = Result<Rational, RationalError>;
    #[inline]
    fn div(self, rhs: Rational) -> Self::Output {
        self.divide(&rhs)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    // `core::ops::Add` stays out of scope so `a.add(&b)` resolves to the inherent method.
    use crate::convert::DivBy;
    use crate::errors::RationalError;
    use crate::rational::Rational;

    fn q(n: i64, d: i64) -> Rational {
        n.div_by(d).unwrap()
    }

    #[test]
    fn identities_from_examples() {
        assert_eq!(q(1, 2).subtract(&q(1, 3)), q(1, 6));
        assert_eq!(q(1, 2).add(&q(1, 3)), q(5, 6));
        assert_eq!(q(1, 2).multiply(&q(1, 3)), q(1, 6));
        assert_eq!(q(1, 2).divide(&q(1, 4)).unwrap(), q(2, 1));
    }

    #[test]
    fn operators_match_named_methods() {
        let a = q(3, 4);
        let b = q(-5, 6);
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.subtract(&b));
        assert_eq!(&a * &b, a.multiply(&b));
        assert_eq!((&a / &b).unwrap(), a.divide(&b).unwrap());
        assert_eq!(-&a, a.negate());
        assert_eq!(a.clone() + b.clone(), q(-1, 12));
        assert_eq!(a.clone() - b.clone(), q(19, 12));
        assert_eq!(a.clone() * b.clone(), q(-5, 8));
        assert_eq!((a / b).unwrap(), q(-9, 10));
    }

    #[test]
    fn results_are_reduced() {
        let x = q(1, 6) + q(1, 3);
        assert_eq!(x.to_string(), "1/2");
        let y = q(2, 3) * q(3, 2);
        assert!(y.is_integer());
        assert_eq!(y, Rational::one());
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(q(1, 2).divide(&Rational::zero()), Err(RationalError::DivisionByZero));
        assert_eq!(q(0, 1).divide(&q(0, 5)), Err(RationalError::DivisionByZero));
        assert_eq!(q(7, 3) / q(0, 1), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn dividing_by_negative_moves_sign_to_numerator() {
        let x = q(1, 2).divide(&q(-1, 4)).unwrap();
        assert_eq!(x, q(-2, 1));
        assert_eq!(x.to_string(), "-2");
    }

    #[test]
    fn negation() {
        let x = q(1, 2);
        assert_eq!(-(-x.clone()), x);
        assert_eq!(-q(1, 2), q(-1, 2));
        assert_eq!(-Rational::zero(), Rational::zero());
        assert!(!(-Rational::zero()).is_negative());
    }

    #[test]
    fn subtraction_to_zero_is_canonical_zero() {
        let x = q(-3, 7);
        assert_eq!(&x - &x, Rational::zero());
        assert_eq!(x.add(&x.negate()), Rational::zero());
    }
}
