//! Exact ordering by cross-multiplication.

use core::cmp::Ordering;

use crate::rational::Rational;

impl Rational {
    /// Compare `(s1*n1)*d2` against `(s2*n2)*d1` in arbitrary precision.
    pub fn compare(&self, other: &Rational) -> Ordering {
        // Fast sign check; zero is always positive so it sorts correctly below.
        match (self.is_negative(), other.is_negative()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let lhs = self.signed_numerator() * other.signed_denominator();
        let rhs = other.signed_numerator() * self.signed_denominator();
        lhs.cmp(&rhs)
    }
}

impl Ord for Rational {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
