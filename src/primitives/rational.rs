//! Reduced-fraction arithmetic underlying note values and durations.
//!
//! A note value behaves so similarly to a rational number that it is tempting
//! to reach for a general fraction crate. But the semantics here are much more
//! restricted than a mathematical rational: numerators model dots, and
//! denominators are small powers of two. It is simpler to build a small type
//! with only the valid operations defined than to fence off the power of a
//! general one.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::{Error, Result};

/// Unsigned integer backing a [Rational]. Implemented for `u16`, `u32` and
/// `u64`; the widening hooks keep cross-multiplied comparison exact.
pub trait Integer:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn widen(self) -> u64;
    fn narrow(v: u64) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn widen(self) -> u64 {
                self as u64
            }
            fn narrow(v: u64) -> Option<Self> {
                Self::try_from(v).ok()
            }
        }
    )*};
}
impl_integer!(u16, u32, u64);

fn gcd<T: Integer>(mut a: T, mut b: T) -> T {
    while b != T::ZERO {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Immutable reduced fraction. Always stored in lowest terms; comparison is
/// by cross-multiplication, never by floating point.
#[derive(Debug, Clone, Copy)]
pub struct Rational<T: Integer> {
    num: T,
    den: T,
}

impl<T: Integer> Rational<T> {
    pub fn new(num: T, den: T) -> Result<Self> {
        if den == T::ZERO {
            return Err(Error::InvalidValue(format!(
                "zero denominator in {num}/{den}"
            )));
        }
        Ok(Self::reduced(num, den))
    }

    /// Reduce a fraction with a known-nonzero denominator.
    pub(crate) fn reduced(num: T, den: T) -> Self {
        debug_assert!(den != T::ZERO);
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Construct from parts already in lowest terms.
    pub(crate) const fn raw(num: T, den: T) -> Self {
        Self { num, den }
    }

    pub fn num(&self) -> T {
        self.num
    }

    pub fn den(&self) -> T {
        self.den
    }

    /// Lossy conversion, for display and quantization only. Never used for
    /// equality or ordering.
    pub fn as_f64(&self) -> f64 {
        self.num.widen() as f64 / self.den.widen() as f64
    }

    /// Reconstruct a rational from a real number by continued-fraction
    /// expansion.
    ///
    /// Rhythmic relationships described by tuplets are simple numbers
    /// compared to general mathematical rationals, which is why the
    /// iteration count is small: no musician can play a 13/17 tuplet, let
    /// alone anything with a bigger denominator.
    ///
    /// ```
    /// # use stave::primitives::Rational;
    /// let r = Rational::<u64>::quantize(1.5).unwrap();
    /// assert_eq!((r.num(), r.den()), (3, 2));
    /// ```
    pub fn quantize(x: f64) -> Result<Self> {
        if !x.is_finite() || x <= 0.0 {
            return Err(Error::Arithmetic(format!(
                "cannot quantize {x} to a rational"
            )));
        }

        let mut x = x;
        let (mut m00, mut m01, mut m10, mut m11) = (1u64, 0u64, 0u64, 1u64);
        for _ in 0..7 {
            let a = x as u64;
            let next = m00 * a + m01;
            m01 = m00;
            m00 = next;
            let next = m10 * a + m11;
            m11 = m10;
            m10 = next;

            if (x - a as f64).abs() < 1e-5 {
                // Degenerate magnitudes converge on the 1/0 or 0/1
                // convergent; neither is a usable ratio.
                if m00 == 0 || m10 == 0 {
                    break;
                }
                let num = T::narrow(m00).ok_or_else(|| {
                    Error::Arithmetic(format!("quantized numerator {m00} out of range"))
                })?;
                let den = T::narrow(m10).ok_or_else(|| {
                    Error::Arithmetic(format!("quantized denominator {m10} out of range"))
                })?;
                return Self::new(num, den);
            }
            x = 1.0 / (x - a as f64);
        }

        Err(Error::Arithmetic(format!(
            "no small rational approximates {x}"
        )))
    }
}

impl<T: Integer> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        self.num.widen() * other.den.widen() == other.num.widen() * self.den.widen()
    }
}

impl<T: Integer> Eq for Rational<T> {}

impl<T: Integer> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integer> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.num.widen() * other.den.widen()).cmp(&(other.num.widen() * self.den.widen()))
    }
}

impl<T: Integer> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction() {
        let r = Rational::<u32>::new(6, 8).unwrap();
        assert_eq!((r.num(), r.den()), (3, 4));
        for k in 1..20u32 {
            assert_eq!(
                Rational::<u32>::new(3 * k, 8 * k).unwrap(),
                Rational::<u32>::new(3, 8).unwrap()
            );
        }
        let r = Rational::<u32>::new(0, 12).unwrap();
        assert_eq!((r.num(), r.den()), (0, 1));
    }

    #[test]
    fn zero_denominator() {
        assert!(matches!(
            Rational::<u16>::new(1, 0),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn exact_comparison() {
        let a = Rational::<u64>::new(1, 3).unwrap();
        let b = Rational::<u64>::new(2, 6).unwrap();
        let c = Rational::<u64>::new(1, 2).unwrap();
        assert_eq!(a, b);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn quantize_small_ratios() {
        for (x, num, den) in [
            (1.5, 3, 2),
            (0.5, 1, 2),
            (2.0 / 3.0, 2, 3),
            (1.25, 5, 4),
            (5.0 / 6.0, 5, 6),
        ] {
            let r = Rational::<u64>::quantize(x).unwrap();
            assert_eq!((r.num(), r.den()), (num, den), "quantize({x})");
        }
    }

    #[test]
    fn quantize_rejects_noise() {
        assert!(Rational::<u64>::quantize(std::f64::consts::PI).is_err());
        assert!(Rational::<u64>::quantize(-1.5).is_err());
        assert!(Rational::<u64>::quantize(f64::NAN).is_err());
    }

    #[test]
    fn quantize_rejects_degenerate_magnitudes() {
        for x in [1e300, 1e-300, f64::MAX] {
            assert!(
                matches!(Rational::<u64>::quantize(x), Err(Error::Arithmetic(_))),
                "quantize({x})"
            );
        }
    }
}
