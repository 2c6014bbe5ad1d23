use log::debug;

use crate::error::{Error, Result};
use crate::notation::Column;
use crate::primitives::{Duration, Rational, Value};

/// A group of columns whose notated total duration is rescaled by an
/// integer ratio, e.g. a triplet plays three eighths in the time of two.
///
/// The stored value is the *outer* (notated) value of the whole group. It
/// is derived from the ratio and the members, never stored alongside the
/// ratio; the writer reconstructs the ratio by quantization.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuplet {
    value: Value,
    elements: Vec<Column>,
}

impl Tuplet {
    pub fn new(value: Value, elements: impl Into<Vec<Column>>) -> Result<Self> {
        let elements = elements.into();
        if elements.len() < 2 {
            return Err(Error::InvalidTuplet(format!(
                "at least two elements required, got {}",
                elements.len()
            )));
        }
        Ok(Self { value, elements })
    }

    /// Build a tuplet the way the grammar does: from a ratio and the
    /// members, deriving the outer value via [Tuplet::scale].
    pub fn from_ratio(num: u64, den: u64, elements: impl Into<Vec<Column>>) -> Result<Self> {
        let elements = elements.into();
        let value = Self::scale_columns(num, den, &elements)?;
        Self::new(value, elements)
    }

    /// Scale an inner duration by `den/num` and reduce the result to one of
    /// the fixed rhythmic categories.
    ///
    /// Tuplets must reduce to a member of [Value::ALL], never an arbitrary
    /// fraction; anything else fails with [Error::InvalidTuplet] reporting
    /// the attempted ratio and durations.
    pub fn scale(num: u64, den: u64, inner: Duration) -> Result<Value> {
        if num == 0 || den == 0 {
            return Err(Error::InvalidTuplet(format!("zero ratio {num}/{den}")));
        }
        let outer = Duration::from_ratio(Rational::reduced(
            inner.num() * den,
            inner.den() * num,
        ));
        Value::ALL
            .into_iter()
            .find(|v| Duration::from(*v) == outer)
            .ok_or_else(|| {
                debug!("no note value matches tuplet {num}/{den} over {inner}");
                Error::InvalidTuplet(format!(
                    "ratio {num}/{den} scales inner duration {inner} to {outer}, \
                     which is not a note value"
                ))
            })
    }

    /// Convenience overload for a [Value] inner duration.
    pub fn scale_value(num: u64, den: u64, inner: Value) -> Result<Value> {
        Self::scale(num, den, inner.into())
    }

    /// Convenience overload summing a sequence of columns first.
    pub fn scale_columns(num: u64, den: u64, elements: &[Column]) -> Result<Value> {
        let inner = elements
            .iter()
            .fold(Duration::zero(), |sum, column| sum + column);
        Self::scale(num, den, inner)
    }

    /// The notated (outer) value of the whole group.
    pub fn value(&self) -> Value {
        self.value
    }

    pub fn elements(&self) -> &[Column] {
        &self.elements
    }
}
