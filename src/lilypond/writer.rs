//! Serialization of the notation model, one clause per variant,
//! structurally the inverse of the reader.

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::lilypond::RendersToLilypond;
use crate::notation::{mode, Beam, Chord, Clef, Column, Key, Meter, Note, Rest, Tuplet};
use crate::primitives::{Duration, Octave, Pitch, PitchClass, Rational, Value};

/// Render a column to its canonical text.
pub fn write(column: &Column) -> Result<String> {
    column.render_lilypond()
}

impl RendersToLilypond for PitchClass {
    fn render_lilypond(&self) -> Result<String> {
        Ok(self.name().to_string())
    }
}

impl RendersToLilypond for Octave {
    fn render_lilypond(&self) -> Result<String> {
        let shift = self.get() as i16 - 4;
        if shift >= 0 {
            Ok("'".repeat(shift as usize))
        } else {
            Ok(",".repeat(-shift as usize))
        }
    }
}

impl RendersToLilypond for Pitch {
    fn render_lilypond(&self) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.class.render_lilypond()?,
            self.octave.render_lilypond()?
        ))
    }
}

impl RendersToLilypond for Value {
    fn render_lilypond(&self) -> Result<String> {
        // The zero-duration sentinel has no spelling of its own.
        if self.num() == 0 {
            return Ok(String::new());
        }
        let digits = self.den() >> self.dots();
        Ok(format!("{}{}", digits, ".".repeat(self.dots() as usize)))
    }
}

impl RendersToLilypond for Rest {
    fn render_lilypond(&self) -> Result<String> {
        Ok(format!("r{}", self.value().render_lilypond()?))
    }
}

impl RendersToLilypond for Note {
    fn render_lilypond(&self) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.pitch().render_lilypond()?,
            self.value().render_lilypond()?
        ))
    }
}

impl RendersToLilypond for Chord {
    fn render_lilypond(&self) -> Result<String> {
        let pitches: Vec<String> = self
            .pitches()
            .iter()
            .map(|p| p.render_lilypond())
            .collect::<Result<_>>()?;
        Ok(format!(
            "<{}>{}",
            pitches.iter().join(" "),
            self.value().render_lilypond()?
        ))
    }
}

impl RendersToLilypond for Beam {
    fn render_lilypond(&self) -> Result<String> {
        let elements: Vec<String> = self
            .elements()
            .iter()
            .map(|c| c.render_lilypond())
            .collect::<Result<_>>()?;
        Ok(format!("[{}]", elements.iter().join(" ")))
    }
}

impl RendersToLilypond for Tuplet {
    fn render_lilypond(&self) -> Result<String> {
        // The model stores only the derived outer value, so the ratio the
        // reader consumed has to be reconstructed from the durations.
        let inner = self
            .elements()
            .iter()
            .fold(Duration::zero(), |sum, column| sum + column);
        let outer = Duration::from(self.value());
        let ratio = Rational::<u64>::quantize(inner.as_f64() / outer.as_f64())?;

        let elements: Vec<String> = self
            .elements()
            .iter()
            .map(|c| c.render_lilypond())
            .collect::<Result<_>>()?;
        Ok(format!(
            "\\tuplet {}/{} {{ {} }}",
            ratio.num(),
            ratio.den(),
            elements.iter().join(" ")
        ))
    }
}

impl RendersToLilypond for Meter {
    fn render_lilypond(&self) -> Result<String> {
        let unit = self.value().render_lilypond()?;
        match self.beats() {
            [beats] => Ok(format!("\\time {beats}/{unit}")),
            groups => Ok(format!(
                "\\compoundMeter #'({})",
                groups.iter().map(|b| format!("({b} {unit})")).join(" ")
            )),
        }
    }
}

impl RendersToLilypond for Clef {
    fn render_lilypond(&self) -> Result<String> {
        Ok(format!("\\clef {}", self.name()))
    }
}

impl RendersToLilypond for Key {
    fn render_lilypond(&self) -> Result<String> {
        let tonic = self.tonic().name();
        if *self == Key::new(self.tonic(), mode::MAJOR)? {
            Ok(format!("\\key {tonic} \\major"))
        } else if *self == Key::new(self.tonic(), mode::MINOR)? {
            Ok(format!("\\key {tonic} \\minor"))
        } else {
            Err(Error::InvalidKey(format!(
                "cannot write {tonic} key with mode {:?}",
                self.mode()
            )))
        }
    }
}

impl RendersToLilypond for Column {
    fn render_lilypond(&self) -> Result<String> {
        match self {
            Column::Rest(r) => r.render_lilypond(),
            Column::Note(n) => n.render_lilypond(),
            Column::Chord(c) => c.render_lilypond(),
            Column::Beam(b) => b.render_lilypond(),
            Column::Tuplet(t) => t.render_lilypond(),
            Column::Meter(m) => m.render_lilypond(),
            Column::Clef(c) => c.render_lilypond(),
            Column::Key(k) => k.render_lilypond(),
        }
    }
}
