//! Chromatic and diatonic scale tables.
//!
//! Note names follow German notation: `b` is B flat and `h` is B natural.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Names of the twelve chromatic steps, starting at C.
const CHROMATIC: [&str; 12] = [
    "c", "#c", "d", "#d", "e", "f", "#f", "g", "#g", "a", "b", "h",
];

/// A chromatic pitch class, always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = Self(0);
    pub const D: Self = Self(2);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(7);
    pub const A: Self = Self(9);
    pub const H: Self = Self(11);

    /// Wraps any semitone count into a pitch class.
    #[must_use]
    pub fn new(semitone: i32) -> Self {
        // rem_euclid(12) is always in 0..12
        Self(u8::try_from(semitone.rem_euclid(12)).unwrap_or_default())
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Whether this step of the chromatic scale is a plain letter name.
    #[must_use]
    pub fn is_natural(self) -> bool {
        let name = CHROMATIC[usize::from(self.0)];
        !name.starts_with('#') && !name.starts_with('b')
    }

    /// One chromatic step up or down (`direction` is +1 or -1).
    #[must_use]
    pub fn step(self, direction: i32) -> Self {
        Self::new(i32::from(self.0) + direction)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        CHROMATIC[usize::from(self.0)]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which clef staff positions are read in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    /// G clef. Position 0 is the `d` of the open D string.
    #[default]
    #[serde(alias = "g")]
    Treble,
    /// F clef. Position 0 is an `f`, read twelve positions below the treble numbering.
    #[serde(alias = "f")]
    Bass,
}

impl Clef {
    /// The seven scale degrees from position 0 upwards.
    #[must_use]
    pub const fn diatonic(self) -> [PitchClass; 7] {
        match self {
            Self::Treble => [
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::H,
                PitchClass::C,
            ],
            Self::Bass => [
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::H,
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
            ],
        }
    }

    /// Pitch class of the natural note at a staff position.
    #[must_use]
    pub fn degree(self, pos: i32) -> PitchClass {
        let j = usize::try_from(pos.rem_euclid(7)).unwrap_or_default();
        self.diatonic()[j]
    }

    /// Offset added to the open-string positions so that the fretboard
    /// lines up with this clef's numbering.
    #[must_use]
    pub const fn fretboard_offset(self) -> i32 {
        match self {
            Self::Treble => 0,
            Self::Bass => 12,
        }
    }
}

impl FromStr for Clef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "g" | "G" | "treble" => Ok(Self::Treble),
            "f" | "F" | "bass" => Ok(Self::Bass),
            _ => Err(Error::InvalidClef(s.to_string())),
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Treble => f.write_str("g"),
            Self::Bass => f.write_str("f"),
        }
    }
}
