//! rat_core — Exact rational numbers in canonical form.
//!
//! This crate is **I/O-free**. It defines one value type, [`Rational`], and a
//! closed interval over it, [`RationalRange`].
//!
//! - Canonical form: coprime magnitudes, positive denominator, separate sign
//! - One normalizing constructor; every operation routes back through it
//! - Exact ordering by cross-multiplication (no floats)
//! - Text form `n` or `n/d`, with a leading `-` on either part when parsing
//!
//! Arbitrary-precision integers come from `num-bigint`.
//! Serialization impls are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors;
pub mod bigint;
pub mod rational;
pub mod arith;
pub mod ordering;
pub mod text;
pub mod range;
pub mod convert;

#[cfg(feature = "serde")]
mod serde_impl;

pub use errors::{RationalError, RationalResult};
pub use bigint::gcd;
pub use rational::{Rational, Sign};
pub use range::RationalRange;
pub use convert::DivBy;

// Integer types callers need to build values by hand.
pub use num_bigint::{BigInt, BigUint};

/// Lightweight re-exports so downstream crates can do `use rat_core::prelude::*;`.
pub mod prelude {
    pub use crate::{BigInt, BigUint, DivBy, Rational, RationalError, RationalRange, RationalResult, Sign};
}
