//! Key signatures: a tonic plus a seven-note mode.

use std::fmt;

use crate::error::{Error, Result};
use crate::primitives::PitchClass;

/// Semitone-offset tables for the modes a key signature can notate.
pub mod mode {
    pub const MAJOR: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
    pub const MINOR: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];
}

/// A tonic pitch class and an ordered list of exactly seven semitone
/// offsets from it.
///
/// Key construction is rare, but every note has to be checked against the
/// key to get accidentals right every time music is rendered. So the
/// constructor precomputes a 256-entry membership table over the pitch
/// class encoding, and [Key::contains] is a single lookup.
#[derive(Clone)]
pub struct Key {
    tonic: PitchClass,
    mode: Vec<u8>,
    fastcheck: [bool; 256],
}

impl Key {
    /// Fails with [Error::InvalidKey] unless the mode has exactly seven
    /// offsets, each within the octave. Major and minor are probably the
    /// only modes ever indicated by a key signature, and there is no
    /// standard notation for key-like entities over non-heptatonic scales
    /// (whole tone, diminished, ...).
    pub fn new(tonic: PitchClass, mode: impl Into<Vec<u8>>) -> Result<Self> {
        let mode = mode.into();
        if mode.len() != 7 {
            return Err(Error::InvalidKey(format!(
                "only standard 7 pitch modes are supported, got {} offsets",
                mode.len()
            )));
        }
        // An offset of 12 or more leaves the octave and would push the
        // computed code past the membership table even after the wrap.
        if let Some(offset) = mode.iter().find(|o| **o >= 12) {
            return Err(Error::InvalidKey(format!(
                "mode offset {offset} is outside the octave"
            )));
        }

        let mut fastcheck = [false; 256];
        for (degree, offset) in mode.iter().enumerate() {
            let degree = degree as i16;
            // Start at the tonic, move up a letter block per scale degree,
            // then correct by the mode's accidental. The -2*degree term
            // accounts for the scale spanning 12 semitones, not 7*2 = 14,
            // because of the half steps between e->f and b->c.
            let mut code =
                tonic.code() as i16 + 0x10 * degree + *offset as i16 - 2 * degree;
            // Wrap around from the b block back to c.
            if code > PitchClass::Bss.code() as i16 {
                code -= 0x70 - 2;
            }
            // Codes in the gap just above the b block wrap negative; byte
            // truncation parks them on unused table entries that no valid
            // pitch class ever queries.
            fastcheck[code as u8 as usize] = true;
        }

        Ok(Self {
            tonic,
            mode,
            fastcheck,
        })
    }

    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    pub fn mode(&self) -> &[u8] {
        &self.mode
    }

    /// O(1) scale membership for a pitch or pitch class.
    pub fn contains(&self, pitch: impl Into<PitchClass>) -> bool {
        self.fastcheck[pitch.into().code() as usize]
    }

    /// The seven members in ascending pitch class order, starting at the
    /// tonic and wrapping through the top of the encoding.
    pub fn scale(&self) -> Vec<PitchClass> {
        let tonic = self.tonic.code();
        let mut members = Vec::with_capacity(7);
        let mut code = tonic;
        loop {
            if self.fastcheck[code as usize] {
                if let Some(pc) = PitchClass::from_code(code) {
                    members.push(pc);
                }
            }
            code = code.wrapping_add(1);
            if code == tonic {
                break;
            }
        }
        members
    }
}

// The membership table is derived data; keys are equal when their tonic and
// mode are.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.tonic == other.tonic && self.mode == other.mode
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("tonic", &self.tonic)
            .field("mode", &self.mode)
            .finish()
    }
}
