//! String-form serde impls (feature `serde`).
//!
//! A `Rational` travels as its canonical text, e.g. `"-13/122"`; incoming
//! strings go through the same parser as `FromStr`.

use core::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::range::RationalRange;
use crate::rational::Rational;

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rational string like \"13/122\" or \"-2\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rational, E> {
        Rational::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RationalVisitor)
    }
}

impl Serialize for RationalRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("RationalRange", 2)?;
        st.serialize_field("start", &self.start)?;
        st.serialize_field("end", &self.end)?;
        st.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeRepr {
    start: Rational,
    end: Rational,
}

impl<'de> Deserialize<'de> for RationalRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RangeRepr { start, end } = RangeRepr::deserialize(deserializer)?;
        Ok(RationalRange::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_is_a_json_string() {
        let x: Rational = "117/1098".parse().unwrap();
        assert_eq!(serde_json::to_string(&x).unwrap(), "\"13/122\"");
        let back: Rational = serde_json::from_str("\"-26/244\"").unwrap();
        assert_eq!(back.to_string(), "-13/122");
    }

    #[test]
    fn bad_strings_are_rejected() {
        assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
        assert!(serde_json::from_str::<Rational>("\"x\"").is_err());
        assert!(serde_json::from_str::<Rational>("12").is_err());
    }

    #[test]
    fn range_round_trip() {
        let r = RationalRange::new("1/3".parse().unwrap(), "2/3".parse().unwrap());
        let s = serde_json::to_string(&r).unwrap();
        assert_eq!(s, r#"{"start":"1/3","end":"2/3"}"#);
        let back: RationalRange = serde_json::from_str(&s).unwrap();
        assert_eq!(back, r);
    }
}
