//! A typed model of Western staff notation (pitches, note values, chords,
//! beams, tuplets, meters, clefs and key signatures) with a bidirectional
//! LilyPond-style text encoding.
//!
//! Text is parsed into a validated [Column] tree and written back to its
//! canonical spelling:
//!
//! ```
//! use stave::{parse, write};
//!
//! let column = parse("\\tuplet 3/2 { c'8 d'8 e'8 }").unwrap();
//! assert_eq!(write(&column).unwrap(), "\\tuplet 3/2 { c'8 d'8 e'8 }");
//! ```
//!
//! Columns can equally be built directly through the variant constructors,
//! which enforce the same invariants the reader does; an invalid notation
//! value cannot exist.

pub mod error;
pub mod lilypond;
pub mod notation;
pub mod primitives;

pub use error::{Error, Result};
pub use lilypond::{parse, write, RendersToLilypond};
pub use notation::{mode, Beam, Chord, Clef, Column, Key, Meter, Note, Rest, Tuplet};
pub use primitives::{Duration, Octave, Pitch, PitchClass, Value};
