//! Closed interval `[start, end]` used as a membership predicate.

use core::ops::RangeInclusive;

use crate::rational::Rational;

/// Not validated: an inverted range (`start > end`) simply contains nothing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RationalRange {
    pub start: Rational,
    pub end: Rational,
}

impl RationalRange {
    pub fn new(start: Rational, end: Rational) -> Self {
        Self { start, end }
    }

    /// `start <= value && value <= end`
    pub fn contains(&self, value: &Rational) -> bool {
        value >= &self.start && value <= &self.end
    }
}

impl Rational {
    /// `[self, end]`
    pub fn range_to(&self, end: &Rational) -> RationalRange {
        RationalRange::new(self.clone(), end.clone())
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(r: RangeInclusive<Rational>) -> Self {
        let (start, end) = r.into_inner();
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::DivBy;

    fn q(n: i64, d: i64) -> Rational {
        n.div_by(d).unwrap()
    }

    #[test]
    fn half_is_in_third_to_two_thirds() {
        assert!(q(1, 3).range_to(&q(2, 3)).contains(&q(1, 2)));
    }

    #[test]
    fn endpoints_are_included() {
        let r = q(1, 3).range_to(&q(2, 3));
        assert!(r.contains(&q(1, 3)));
        assert!(r.contains(&q(4, 6)));
        assert!(!r.contains(&q(1, 4)));
        assert!(!r.contains(&q(3, 4)));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let r = RationalRange::new(q(2, 3), q(1, 3));
        assert!(!r.contains(&q(1, 2)));
        assert!(!r.contains(&q(2, 3)));
        assert!(!r.contains(&q(1, 3)));
    }

    #[test]
    fn degenerate_range_holds_one_point() {
        let r = q(-1, 2).range_to(&q(2, -4));
        assert!(r.contains(&q(-3, 6)));
        assert!(!r.contains(&Rational::zero()));
    }

    #[test]
    fn from_std_range() {
        let r: RationalRange = (q(-1, 1)..=q(1, 1)).into();
        assert_eq!(r, q(-1, 1).range_to(&q(1, 1)));
        assert!(r.contains(&Rational::zero()));
    }
}
