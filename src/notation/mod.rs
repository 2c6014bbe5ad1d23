//! The recursive notation model: one [Column] per notational unit in a
//! voice.
//!
//! Columns nest (notes and chords are elements of beams and tuplets in
//! addition to being columns by themselves), so Beam and Tuplet own their
//! children by value in a `Vec<Column>`. `Clone` is therefore a deep copy
//! of the whole subtree and derived `PartialEq` is structural, with no
//! special-cased visitors.
//!
//! Every variant validates at construction; an invalid column can never
//! exist, whether it arrives from the reader or is built directly.

use std::ops::Add;

pub mod beam;
pub mod chord;
pub mod clef;
pub mod key;
pub mod meter;
pub mod tuplet;

pub use beam::Beam;
pub use chord::Chord;
pub use clef::Clef;
pub use key::{mode, Key};
pub use meter::Meter;
pub use tuplet::Tuplet;

use crate::primitives::{Duration, Pitch, Value};

/// A silence of a given value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rest {
    value: Value,
}

impl Rest {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Value {
        self.value
    }
}

/// A single pitch sounded for a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    value: Value,
    pitch: Pitch,
}

impl Note {
    pub fn new(value: Value, pitch: Pitch) -> Self {
        Self { value, pitch }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }
}

/// One notational unit in a voice.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Rest(Rest),
    Note(Note),
    Chord(Chord),
    Beam(Beam),
    Tuplet(Tuplet),
    Meter(Meter),
    Clef(Clef),
    Key(Key),
}

impl Column {
    /// How much musical time this column consumes.
    ///
    /// Beams sum their children; clef and key changes take no time; a
    /// tuplet takes its notated outer value.
    pub fn duration(&self) -> Duration {
        match self {
            Column::Rest(r) => r.value().into(),
            Column::Note(n) => n.value().into(),
            Column::Chord(c) => c.value().into(),
            Column::Tuplet(t) => t.value().into(),
            Column::Meter(m) => m.value().into(),
            Column::Beam(b) => b
                .elements()
                .iter()
                .fold(Duration::zero(), |sum, column| sum + column),
            Column::Clef(_) | Column::Key(_) => Duration::zero(),
        }
    }
}

/// Accumulate time while walking a sequence of columns.
impl Add<&Column> for Duration {
    type Output = Duration;

    fn add(self, column: &Column) -> Duration {
        self + column.duration()
    }
}

impl From<Rest> for Column {
    fn from(v: Rest) -> Self {
        Column::Rest(v)
    }
}
impl From<Note> for Column {
    fn from(v: Note) -> Self {
        Column::Note(v)
    }
}
impl From<Chord> for Column {
    fn from(v: Chord) -> Self {
        Column::Chord(v)
    }
}
impl From<Beam> for Column {
    fn from(v: Beam) -> Self {
        Column::Beam(v)
    }
}
impl From<Tuplet> for Column {
    fn from(v: Tuplet) -> Self {
        Column::Tuplet(v)
    }
}
impl From<Meter> for Column {
    fn from(v: Meter) -> Self {
        Column::Meter(v)
    }
}
impl From<Clef> for Column {
    fn from(v: Clef) -> Self {
        Column::Clef(v)
    }
}
impl From<Key> for Column {
    fn from(v: Key) -> Self {
        Column::Key(v)
    }
}
