//! Recursive-descent reader for the LilyPond-style syntax.
//!
//! One production per column variant, composed into [Reader::column] which
//! dispatches on the leading token: `r` for a rest, a pitch letter for a
//! note, `<` for a chord, `[` for a beam, and `\tuplet`/`\time`/`\clef`/
//! `\key` keywords for the rest. Construction of the model enforces the
//! notation invariants, so an invalid parse cannot produce an invalid
//! model value.

use log::trace;

use crate::error::{Error, Result};
use crate::notation::{mode, Beam, Chord, Clef, Column, Key, Meter, Note, Rest, Tuplet};
use crate::primitives::{Octave, Pitch, PitchClass, Value};

/// Parse a complete column from `input`.
///
/// The whole input must be consumed, with only whitespace permitted as
/// filler between tokens; trailing text fails with
/// [Error::IncompleteParse].
///
/// ```
/// # use stave::{parse, Column};
/// let column = parse("c4").unwrap();
/// assert!(matches!(column, Column::Note(_)));
/// ```
pub fn parse(input: &str) -> Result<Column> {
    let mut reader = Reader { input, pos: 0 };
    let column = reader.column()?;
    reader.skip_ws();
    if reader.pos < input.len() {
        return Err(Error::IncompleteParse {
            pos: reader.pos,
            rest: snippet(reader.remaining()),
        });
    }
    Ok(column)
}

fn snippet(s: &str) -> String {
    s.chars().take(24).collect()
}

fn is_pitch_letter(c: char) -> bool {
    matches!(c, 'a'..='g')
}

struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.remaining().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn error(&self) -> Error {
        Error::Parse {
            pos: self.pos,
            found: snippet(self.remaining()),
        }
    }

    fn eat(&mut self, literal: &str) -> Result<()> {
        if self.remaining().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// A run of lowercase letters, e.g. a keyword or clef name.
    fn word(&mut self) -> &'a str {
        let rest = self.remaining();
        let len = rest
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn uint(&mut self) -> Result<u64> {
        let rest = self.remaining();
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error());
        }
        let parsed = rest[..len].parse().map_err(|_| self.error())?;
        self.pos += len;
        Ok(parsed)
    }

    fn column(&mut self) -> Result<Column> {
        self.skip_ws();
        trace!("column alternative at byte {}: {:?}", self.pos, self.peek());
        match self.peek() {
            Some('r') => self.rest(),
            Some('<') => self.chord(),
            Some('[') => self.beam(),
            Some('\\') => self.keyword(),
            Some(c) if is_pitch_letter(c) => self.note(),
            _ => Err(self.error()),
        }
    }

    fn rest(&mut self) -> Result<Column> {
        self.eat("r")?;
        let value = self.value()?;
        Ok(Rest::new(value).into())
    }

    fn note(&mut self) -> Result<Column> {
        let pitch = self.pitch()?;
        let value = self.value()?;
        Ok(Note::new(value, pitch).into())
    }

    fn chord(&mut self) -> Result<Column> {
        self.eat("<")?;
        self.skip_ws();
        let mut pitches = vec![self.pitch()?];
        loop {
            self.skip_ws();
            match self.peek() {
                Some(c) if is_pitch_letter(c) => pitches.push(self.pitch()?),
                _ => break,
            }
        }
        self.eat(">")?;
        let value = self.value()?;
        Ok(Chord::new(value, pitches)?.into())
    }

    fn beam(&mut self) -> Result<Column> {
        self.eat("[")?;
        let mut elements = vec![self.column()?];
        loop {
            self.skip_ws();
            if self.peek() == Some(']') {
                self.pos += 1;
                break;
            }
            elements.push(self.column()?);
        }
        Ok(Beam::new(elements)?.into())
    }

    fn keyword(&mut self) -> Result<Column> {
        let start = self.pos;
        self.pos += 1;
        let keyword = self.word();
        match keyword {
            "tuplet" => self.tuplet(),
            "time" => self.meter(),
            "clef" => self.clef(),
            "key" => self.key(),
            _ => {
                self.pos = start;
                Err(self.error())
            }
        }
    }

    fn tuplet(&mut self) -> Result<Column> {
        self.skip_ws();
        let num = self.uint()?;
        self.skip_ws();
        self.eat("/")?;
        self.skip_ws();
        let den = self.uint()?;
        self.skip_ws();
        self.eat("{")?;
        let mut elements = vec![self.column()?];
        loop {
            self.skip_ws();
            if self.peek() == Some('}') {
                self.pos += 1;
                break;
            }
            elements.push(self.column()?);
        }
        // The outer value is never read from text; it is derived from the
        // ratio and the members' summed duration.
        Ok(Tuplet::from_ratio(num, den, elements)?.into())
    }

    fn meter(&mut self) -> Result<Column> {
        self.skip_ws();
        let pos = self.pos;
        let beats = u8::try_from(self.uint()?).map_err(|_| Error::Parse {
            pos,
            found: snippet(&self.input[pos..]),
        })?;
        self.skip_ws();
        self.eat("/")?;
        self.skip_ws();
        let unit = self.base_value()?;
        Ok(Meter::new([beats], unit)?.into())
    }

    fn clef(&mut self) -> Result<Column> {
        self.skip_ws();
        let pos = self.pos;
        let name = self.word();
        match Clef::from_name(name) {
            Some(clef) => Ok(clef.into()),
            None => {
                self.pos = pos;
                Err(self.error())
            }
        }
    }

    fn key(&mut self) -> Result<Column> {
        self.skip_ws();
        let tonic = self.pitchclass()?;
        self.skip_ws();
        let pos = self.pos;
        self.eat("\\")?;
        let key = match self.word() {
            "major" => Key::new(tonic, mode::MAJOR)?,
            "minor" => Key::new(tonic, mode::MINOR)?,
            _ => {
                self.pos = pos;
                return Err(self.error());
            }
        };
        Ok(key.into())
    }

    fn pitch(&mut self) -> Result<Pitch> {
        let class = self.pitchclass()?;
        let octave = self.octave();
        Ok(Pitch::new(class, octave))
    }

    /// Longest-match over the letter tokens, so `css` wins over `cs` over
    /// `c`.
    fn pitchclass(&mut self) -> Result<PitchClass> {
        let rest = self.remaining();
        for len in (1..=3).rev() {
            if let Some(token) = rest.get(..len) {
                if let Some(class) = PitchClass::from_name(token) {
                    self.pos += len;
                    return Ok(class);
                }
            }
        }
        Err(self.error())
    }

    /// Octave-shift marks relative to the base octave 4: each `'` raises,
    /// each `,` lowers. At most four of either, per the practical 0..=8
    /// range.
    fn octave(&mut self) -> Octave {
        let mut octave = 4u8;
        match self.peek() {
            Some('\'') => {
                while octave < 8 && self.peek() == Some('\'') {
                    octave += 1;
                    self.pos += 1;
                }
            }
            Some(',') => {
                while octave > 0 && self.peek() == Some(',') {
                    octave -= 1;
                    self.pos += 1;
                }
            }
            _ => {}
        }
        Octave::new(octave)
    }

    /// A base duration token: 1, 2, 4, 8, 16, 32 or 64.
    fn base_value(&mut self) -> Result<Value> {
        let rest = self.remaining();
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let value = match &rest[..len] {
            "1" => Value::whole(),
            "2" => Value::half(),
            "4" => Value::quarter(),
            "8" => Value::eighth(),
            "16" => Value::sixteenth(),
            "32" => Value::thirtysecond(),
            "64" => Value::sixtyfourth(),
            _ => return Err(self.error()),
        };
        self.pos += len;
        Ok(value)
    }

    /// A base duration with up to two dots.
    fn value(&mut self) -> Result<Value> {
        let mut value = self.base_value()?;
        for _ in 0..2 {
            if self.peek() == Some('.') {
                value = value.dot()?;
                self.pos += 1;
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Octave;

    fn c(octave: u8) -> Pitch {
        Pitch::new(PitchClass::C, Octave::new(octave))
    }

    #[test]
    fn notes() {
        assert_eq!(
            parse("c4").unwrap(),
            Note::new(Value::quarter(), c(4)).into()
        );
        assert_eq!(
            parse("c'8.").unwrap(),
            Note::new(Value::eighth().dot().unwrap(), c(5)).into()
        );
        assert_eq!(
            parse("fss,,16").unwrap(),
            Note::new(
                Value::sixteenth(),
                Pitch::new(PitchClass::Fss, Octave::new(2))
            )
            .into()
        );
    }

    #[test]
    fn rests() {
        assert_eq!(parse("r2").unwrap(), Rest::new(Value::half()).into());
        assert_eq!(
            parse(" r1. ").unwrap(),
            Rest::new(Value::whole().dot().unwrap()).into()
        );
    }

    #[test]
    fn chords() {
        let expected = Chord::new(
            Value::quarter(),
            vec![c(4), Pitch::new(PitchClass::E, Octave::new(4))],
        )
        .unwrap();
        assert_eq!(parse("<c e>4").unwrap(), expected.clone().into());
        assert_eq!(parse("< c e >4").unwrap(), expected.into());
        assert!(matches!(
            parse("<c c>4"),
            Err(Error::InvalidChord(_))
        ));
    }

    #[test]
    fn beams() {
        let expected = Beam::new(vec![
            Column::from(Note::new(Value::eighth(), c(4))),
            Note::new(Value::eighth(), c(4)).into(),
        ])
        .unwrap();
        assert_eq!(parse("[c8 c8]").unwrap(), expected.into());
        assert!(matches!(parse("[r8 c8]"), Err(Error::InvalidBeam(_))));
    }

    #[test]
    fn tuplets_derive_outer_value() {
        let column = parse("\\tuplet 3/2 { c8 c8 c8 }").unwrap();
        match column {
            Column::Tuplet(t) => {
                assert_eq!(t.value(), Value::quarter());
                assert_eq!(t.elements().len(), 3);
            }
            other => panic!("expected tuplet, got {other:?}"),
        }
    }

    #[test]
    fn meters() {
        assert_eq!(
            parse("\\time 3/4").unwrap(),
            Meter::new([3], Value::quarter()).unwrap().into()
        );
        assert_eq!(
            parse("\\time 6/8").unwrap(),
            Meter::new([6], Value::eighth()).unwrap().into()
        );
        assert!(matches!(parse("\\time 4/1"), Err(Error::InvalidMeter(_))));
    }

    #[test]
    fn clefs_and_keys() {
        assert_eq!(parse("\\clef bass").unwrap(), Clef::Bass.into());
        assert_eq!(
            parse("\\key d \\minor").unwrap(),
            Key::new(PitchClass::D, mode::MINOR).unwrap().into()
        );
        assert!(parse("\\clef baritone").is_err());
        assert!(parse("\\key d \\dorian").is_err());
    }

    #[test]
    fn rejects_unknown_leading_tokens() {
        assert!(matches!(parse("h4"), Err(Error::Parse { .. })));
        assert!(matches!(parse("\\tempo 120"), Err(Error::Parse { .. })));
        assert!(matches!(parse(""), Err(Error::Parse { .. })));
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(matches!(
            parse("c4 garbage"),
            Err(Error::IncompleteParse { .. })
        ));
        assert!(matches!(
            parse("c4."),
            Ok(_)
        ));
        // A third dot is outside the grammar and remains unconsumed.
        assert!(matches!(
            parse("c4..."),
            Err(Error::IncompleteParse { .. })
        ));
    }
}
