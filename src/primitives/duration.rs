//! Accumulated musical time, as a sum of note values.

use std::fmt;
use std::ops::{Add, Mul};

use crate::primitives::Rational;

/// A general accumulatable time quantity.
///
/// Arbitrary durations cannot be constructed publicly; they are obtained
/// from [crate::primitives::Value] conversion, accumulated with `+`, scaled
/// with `*`, or initialized with [Duration::zero]. Every duration therefore
/// corresponds to a coherent elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(Rational<u64>);

impl Duration {
    pub const fn zero() -> Self {
        Self(Rational::raw(0, 1))
    }

    pub(crate) fn from_ratio(r: Rational<u64>) -> Self {
        Self(r)
    }

    pub fn num(&self) -> u64 {
        self.0.num()
    }

    pub fn den(&self) -> u64 {
        self.0.den()
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64()
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(Rational::reduced(
            self.num() * rhs.den() + rhs.num() * self.den(),
            self.den() * rhs.den(),
        ))
    }
}

impl Mul<u64> for Duration {
    type Output = Self;

    fn mul(self, times: u64) -> Self {
        Self(Rational::reduced(self.num() * times, self.den()))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
