//! Enharmonic pitch naming and ordering, after American Standard Pitch
//! Notation.
//!
//! Whoever designed the system of Western harmony was definitely not a
//! software engineer. Enharmonic spellings and the oddball half steps
//! between b→c and e→f make for bug-prone models of harmony.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// One of the 35 enharmonic pitch spellings: 7 letters times 5 accidental
/// degrees (double-flat through double-sharp).
///
/// The discriminants give each letter a 16-wide block with deliberate gaps,
/// so that key-signature arithmetic falls out of simple offset math (see
/// [crate::notation::Key]). The f..b blocks start one lower than the
/// letter-times-0x10 grid to account for the e→f half step. Invalid
/// double-accidental combinations are simply absent, which is why iteration
/// goes through [PitchClass::ALL] rather than a range scan.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PitchClass {
    Cff = 0x02,
    Cf = 0x03,
    C = 0x04,
    Cs = 0x05,
    Css = 0x06,
    Dff = 0x12,
    Df = 0x13,
    D = 0x14,
    Ds = 0x15,
    Dss = 0x16,
    Eff = 0x22,
    Ef = 0x23,
    E = 0x24,
    Es = 0x25,
    Ess = 0x26,
    Fff = 0x31,
    Ff = 0x32,
    F = 0x33,
    Fs = 0x34,
    Fss = 0x35,
    Gff = 0x41,
    Gf = 0x42,
    G = 0x43,
    Gs = 0x44,
    Gss = 0x45,
    Aff = 0x51,
    Af = 0x52,
    A = 0x53,
    As = 0x54,
    Ass = 0x55,
    Bff = 0x61,
    Bf = 0x62,
    B = 0x63,
    Bs = 0x64,
    Bss = 0x65,
}

static CODE_LOOKUP: Lazy<HashMap<u8, PitchClass>> =
    Lazy::new(|| PitchClass::ALL.iter().map(|pc| (pc.code(), *pc)).collect());

static NAME_LOOKUP: Lazy<HashMap<&'static str, PitchClass>> =
    Lazy::new(|| PitchClass::ALL.iter().map(|pc| (pc.name(), *pc)).collect());

impl PitchClass {
    /// Every valid pitch class, in encoding (and therefore musical) order.
    pub const ALL: [PitchClass; 35] = [
        Self::Cff,
        Self::Cf,
        Self::C,
        Self::Cs,
        Self::Css,
        Self::Dff,
        Self::Df,
        Self::D,
        Self::Ds,
        Self::Dss,
        Self::Eff,
        Self::Ef,
        Self::E,
        Self::Es,
        Self::Ess,
        Self::Fff,
        Self::Ff,
        Self::F,
        Self::Fs,
        Self::Fss,
        Self::Gff,
        Self::Gf,
        Self::G,
        Self::Gs,
        Self::Gss,
        Self::Aff,
        Self::Af,
        Self::A,
        Self::As,
        Self::Ass,
        Self::Bff,
        Self::Bf,
        Self::B,
        Self::Bs,
        Self::Bss,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Recover a pitch class from its encoded value. `None` for codes in
    /// the encoding gaps.
    pub fn from_code(code: u8) -> Option<Self> {
        CODE_LOOKUP.get(&code).copied()
    }

    /// The canonical letter token: letter plus `ff`/`f`/(nothing)/`s`/`ss`.
    pub fn name(self) -> &'static str {
        use PitchClass::*;
        match self {
            Cff => "cff",
            Cf => "cf",
            C => "c",
            Cs => "cs",
            Css => "css",
            Dff => "dff",
            Df => "df",
            D => "d",
            Ds => "ds",
            Dss => "dss",
            Eff => "eff",
            Ef => "ef",
            E => "e",
            Es => "es",
            Ess => "ess",
            Fff => "fff",
            Ff => "ff",
            F => "f",
            Fs => "fs",
            Fss => "fss",
            Gff => "gff",
            Gf => "gf",
            G => "g",
            Gs => "gs",
            Gss => "gss",
            Aff => "aff",
            Af => "af",
            A => "a",
            As => "as",
            Ass => "ass",
            Bff => "bff",
            Bf => "bf",
            B => "b",
            Bs => "bs",
            Bss => "bss",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NAME_LOOKUP.get(name).copied()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An octave number with very limited semantics: middle C lives in octave 4,
/// and the practical range is 0 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octave(u8);

impl Octave {
    pub const fn new(octave: u8) -> Self {
        Self(octave)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A pitch class bound to an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: Octave,
}

impl Pitch {
    pub const fn new(class: PitchClass, octave: Octave) -> Self {
        Self { class, octave }
    }

    /// MIDI pitch number, C4=60 convention. This reduction discards all
    /// subtlety about enharmonics; there is no way back from the number to
    /// a pitch.
    pub fn midi(&self) -> u8 {
        use PitchClass::*;
        let base: i16 = match self.class {
            Cff => 58,
            Cf => 59,
            C => 60,
            Cs => 61,
            Css => 62,
            Dff => 60,
            Df => 61,
            D => 62,
            Ds => 63,
            Dss => 64,
            Eff => 62,
            Ef => 63,
            E => 64,
            Es => 65,
            Ess => 66,
            Fff => 63,
            Ff => 64,
            F => 65,
            Fs => 66,
            Fss => 67,
            Gff => 65,
            Gf => 66,
            G => 67,
            Gs => 68,
            Gss => 69,
            Aff => 67,
            Af => 68,
            A => 69,
            As => 70,
            Ass => 71,
            Bff => 69,
            Bf => 70,
            B => 71,
            Bs => 72,
            Bss => 73,
        };
        (base + (self.octave.get() as i16 - 4) * 12) as u8
    }

    /// Staff line offset referenced to C4=0; one step per letter name, so
    /// enharmonic spellings of the same sound land on different lines.
    pub fn staffline(&self) -> i16 {
        // Letter index from the encoding block; the f..b blocks sit one
        // below the 0x10 grid.
        let code = self.class.code();
        let letter = ((code + if code >= 0x31 { 1 } else { 0 }) >> 4) as i16;
        letter + (self.octave.get() as i16 - 4) * 7
    }
}

impl From<Pitch> for PitchClass {
    fn from(p: Pitch) -> Self {
        p.class
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.octave
            .cmp(&other.octave)
            .then(self.class.cmp(&other.class))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_round_trip() {
        assert_eq!(PitchClass::ALL.len(), 35);
        for pc in PitchClass::ALL {
            assert_eq!(PitchClass::from_name(pc.name()), Some(pc));
            assert_eq!(PitchClass::from_code(pc.code()), Some(pc));
        }
    }

    #[test]
    fn encoding_gaps_are_invalid() {
        assert_eq!(PitchClass::from_code(0x00), None);
        assert_eq!(PitchClass::from_code(0x07), None);
        assert_eq!(PitchClass::from_code(0x30), None);
        assert_eq!(PitchClass::from_code(0xff), None);
    }

    #[test]
    fn ordering() {
        let c4 = Pitch::new(PitchClass::C, Octave::new(4));
        let e4 = Pitch::new(PitchClass::E, Octave::new(4));
        let c5 = Pitch::new(PitchClass::C, Octave::new(5));
        assert!(c4 < e4);
        assert!(e4 < c5);
        assert!(PitchClass::Cs < PitchClass::Df);
    }

    #[test]
    fn midi_numbers() {
        assert_eq!(Pitch::new(PitchClass::C, Octave::new(4)).midi(), 60);
        assert_eq!(Pitch::new(PitchClass::A, Octave::new(4)).midi(), 69);
        assert_eq!(Pitch::new(PitchClass::C, Octave::new(5)).midi(), 72);
        assert_eq!(Pitch::new(PitchClass::Bs, Octave::new(3)).midi(), 60);
        assert_eq!(Pitch::new(PitchClass::Cff, Octave::new(4)).midi(), 58);
    }

    #[test]
    fn stafflines() {
        assert_eq!(Pitch::new(PitchClass::C, Octave::new(4)).staffline(), 0);
        assert_eq!(Pitch::new(PitchClass::Cs, Octave::new(4)).staffline(), 0);
        assert_eq!(Pitch::new(PitchClass::D, Octave::new(4)).staffline(), 1);
        assert_eq!(Pitch::new(PitchClass::F, Octave::new(4)).staffline(), 3);
        assert_eq!(Pitch::new(PitchClass::B, Octave::new(4)).staffline(), 6);
        assert_eq!(Pitch::new(PitchClass::C, Octave::new(5)).staffline(), 7);
        assert_eq!(Pitch::new(PitchClass::B, Octave::new(3)).staffline(), -1);
    }
}
