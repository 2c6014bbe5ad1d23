use crate::error::{Error, Result};
use crate::primitives::Value;

/// A meter (time signature) change: beat-group sizes over a beat unit.
///
/// A single group is a simple meter like 3/4; several groups form a
/// compound meter like (3+2)/8.
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    beats: Vec<u8>,
    value: Value,
}

impl Meter {
    const BEAT_UNITS: [Value; 5] = [
        Value::half(),
        Value::quarter(),
        Value::eighth(),
        Value::sixteenth(),
        Value::thirtysecond(),
    ];

    pub fn new(beats: impl Into<Vec<u8>>, value: Value) -> Result<Self> {
        let beats = beats.into();
        if beats.is_empty() {
            return Err(Error::InvalidMeter(
                "at least one beat group required".to_string(),
            ));
        }
        if beats.iter().any(|b| *b == 0) {
            return Err(Error::InvalidMeter("empty beat group".to_string()));
        }
        if !Self::BEAT_UNITS.contains(&value) {
            return Err(Error::InvalidMeter(format!(
                "{value} is not a valid beat unit"
            )));
        }
        Ok(Self { beats, value })
    }

    pub fn beats(&self) -> &[u8] {
        &self.beats
    }

    pub fn value(&self) -> Value {
        self.value
    }
}
