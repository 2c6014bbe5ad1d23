use std::fmt;

/// The five clef types a staff can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clef {
    Treble,
    Alto,
    Tenor,
    Bass,
    Percussion,
}

impl Clef {
    pub const ALL: [Clef; 5] = [
        Clef::Treble,
        Clef::Alto,
        Clef::Tenor,
        Clef::Bass,
        Clef::Percussion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Alto => "alto",
            Clef::Tenor => "tenor",
            Clef::Bass => "bass",
            Clef::Percussion => "percussion",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
