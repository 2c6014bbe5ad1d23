//! Rhythmic duration categories: whole through 64th, with up to two dots.

use std::fmt;
use std::ops::Mul;

use crate::error::{Error, Result};
use crate::primitives::{Duration, Rational};

/// One of the enumerable rhythmic categories of staff notation.
///
/// A value is a [Rational] with numerator 1, 3 or 7 (zero, one or two dots)
/// and a power-of-two denominator from 1 to 64, plus the zero-duration
/// sentinel [Value::instantaneous]. Only the named constructors and
/// [Value::dot] can produce one, so every instance is notatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Value(Rational<u16>);

impl Value {
    const fn from_parts(num: u16, den: u16) -> Self {
        Self(Rational::raw(num, den))
    }

    pub const fn whole() -> Self {
        Self::from_parts(1, 1)
    }
    pub const fn half() -> Self {
        Self::from_parts(1, 2)
    }
    pub const fn quarter() -> Self {
        Self::from_parts(1, 4)
    }
    pub const fn eighth() -> Self {
        Self::from_parts(1, 8)
    }
    pub const fn sixteenth() -> Self {
        Self::from_parts(1, 16)
    }
    pub const fn thirtysecond() -> Self {
        Self::from_parts(1, 32)
    }
    pub const fn sixtyfourth() -> Self {
        Self::from_parts(1, 64)
    }

    /// The zero-duration sentinel. Valid, but not a member of [Value::ALL].
    pub const fn instantaneous() -> Self {
        Self::from_parts(0, 1)
    }

    /// Every valid dotted and undotted value: 7 base values, 6 single-dot,
    /// 5 double-dot. The 64th cannot carry dots at all, and the 32nd only
    /// one, because the resulting denominators would leave the enumeration.
    pub const ALL: [Value; 18] = [
        Self::whole(),
        Self::half(),
        Self::quarter(),
        Self::eighth(),
        Self::sixteenth(),
        Self::thirtysecond(),
        Self::sixtyfourth(),
        Self::from_parts(3, 2),
        Self::from_parts(3, 4),
        Self::from_parts(3, 8),
        Self::from_parts(3, 16),
        Self::from_parts(3, 32),
        Self::from_parts(3, 64),
        Self::from_parts(7, 4),
        Self::from_parts(7, 8),
        Self::from_parts(7, 16),
        Self::from_parts(7, 32),
        Self::from_parts(7, 64),
    ];

    pub fn num(&self) -> u16 {
        self.0.num()
    }

    pub fn den(&self) -> u16 {
        self.0.den()
    }

    /// Number of rhythmic dots: 0, 1 or 2.
    pub fn dots(&self) -> u8 {
        match self.num() {
            3 => 1,
            7 => 2,
            _ => 0,
        }
    }

    /// Extend this value by half of itself, notated as a dot.
    ///
    /// Fails with [Error::InvalidValue] on a third dot, on the
    /// instantaneous sentinel, and where the result would be shorter than a
    /// 64th.
    pub fn dot(self) -> Result<Self> {
        let num = match self.num() {
            1 => 3,
            3 => 7,
            _ => {
                return Err(Error::InvalidValue(format!("cannot dot {self}")));
            }
        };
        let den = self.den() * 2;
        if den > 64 {
            return Err(Error::InvalidValue(format!("cannot dot {self}")));
        }
        Ok(Self::from_parts(num, den))
    }

    /// Double the base duration, keeping dots. Fails above a whole note.
    pub fn augment(self) -> Result<Self> {
        if self.num() == 0 || self.den() == 1 {
            return Err(Error::InvalidValue(format!("cannot augment {self}")));
        }
        Ok(Self::from_parts(self.num(), self.den() / 2))
    }

    /// Halve the base duration, keeping dots. Fails below a 64th.
    pub fn dimin(self) -> Result<Self> {
        if self.num() == 0 || self.den() * 2 > 64 {
            return Err(Error::InvalidValue(format!("cannot diminish {self}")));
        }
        Ok(Self::from_parts(self.num(), self.den() * 2))
    }
}

impl From<Value> for Duration {
    fn from(v: Value) -> Self {
        Duration::from_ratio(Rational::raw(v.num() as u64, v.den() as u64))
    }
}

impl Mul<u64> for Value {
    type Output = Duration;

    fn mul(self, times: u64) -> Duration {
        Duration::from(self) * times
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_progression() {
        assert_eq!(Value::quarter().dot().unwrap(), Value::from_parts(3, 8));
        assert_eq!(
            Value::quarter().dot().unwrap().dot().unwrap(),
            Value::from_parts(7, 16)
        );
    }

    #[test]
    fn third_dot_fails() {
        let double_dotted = Value::whole().dot().unwrap().dot().unwrap();
        assert!(matches!(
            double_dotted.dot(),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn short_values_resist_dots() {
        assert!(Value::sixtyfourth().dot().is_err());
        assert!(Value::thirtysecond().dot().unwrap().dot().is_err());
        assert!(Value::instantaneous().dot().is_err());
    }

    #[test]
    fn all_is_closed_and_exact() {
        assert_eq!(Value::ALL.len(), 18);
        for v in Value::ALL {
            assert!(matches!(v.num(), 1 | 3 | 7), "{v}");
            assert!(v.den().is_power_of_two() && v.den() <= 64, "{v}");
        }
        // Every member is reachable from a base value and dots.
        let mut reachable = Vec::new();
        for base in [
            Value::whole(),
            Value::half(),
            Value::quarter(),
            Value::eighth(),
            Value::sixteenth(),
            Value::thirtysecond(),
            Value::sixtyfourth(),
        ] {
            reachable.push(base);
            let mut v = base;
            while let Ok(dotted) = v.dot() {
                reachable.push(dotted);
                v = dotted;
            }
        }
        reachable.sort();
        let mut all = Value::ALL.to_vec();
        all.sort();
        assert_eq!(all, reachable);
    }

    #[test]
    fn dots_counts() {
        assert_eq!(Value::half().dots(), 0);
        assert_eq!(Value::half().dot().unwrap().dots(), 1);
        assert_eq!(Value::half().dot().unwrap().dot().unwrap().dots(), 2);
        assert_eq!(Value::instantaneous().dots(), 0);
    }

    #[test]
    fn augment_and_dimin() {
        assert_eq!(Value::quarter().augment().unwrap(), Value::half());
        assert_eq!(Value::quarter().dimin().unwrap(), Value::eighth());
        assert_eq!(
            Value::eighth().dot().unwrap().augment().unwrap(),
            Value::quarter().dot().unwrap()
        );
        assert!(Value::whole().augment().is_err());
        assert!(Value::sixtyfourth().dimin().is_err());
        assert!(Value::instantaneous().augment().is_err());
    }

    #[test]
    fn value_to_duration_is_exact() {
        let d = Duration::from(Value::quarter().dot().unwrap());
        assert_eq!((d.num(), d.den()), (3, 8));
        let d = Duration::from(Value::instantaneous());
        assert_eq!(d, Duration::zero());
    }
}
