use crate::error::{Error, Result};
use crate::primitives::{Pitch, Value};

/// Two or more distinct pitches sounded for one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    value: Value,
    pitches: Vec<Pitch>,
}

impl Chord {
    /// Pitches are stored sorted. Fails with [Error::InvalidChord] on fewer
    /// than two pitches or on duplicates.
    pub fn new(value: Value, pitches: impl Into<Vec<Pitch>>) -> Result<Self> {
        let mut pitches = pitches.into();
        if pitches.len() < 2 {
            return Err(Error::InvalidChord(format!(
                "at least two pitches required, got {}",
                pitches.len()
            )));
        }

        let given = pitches.len();
        pitches.sort();
        pitches.dedup();
        if pitches.len() != given {
            return Err(Error::InvalidChord("unique pitches required".to_string()));
        }

        Ok(Self { value, pitches })
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }
}
