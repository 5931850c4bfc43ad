//! One fret (or none) per string.

use std::ops::Index;

use crate::fretboard::tuning::STRINGS;

/// Fret per string, lowest string first. `None` marks an unused string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tab {
    frets: [Option<u8>; STRINGS],
}

impl Tab {
    #[must_use]
    pub const fn new(frets: [Option<u8>; STRINGS]) -> Self {
        Self { frets }
    }

    #[must_use]
    pub const fn frets(&self) -> &[Option<u8>; STRINGS] {
        &self.frets
    }

    pub fn set(&mut self, string: usize, fret: Option<u8>) {
        self.frets[string] = fret;
    }

    /// Number of strings with a fret.
    #[must_use]
    pub fn used(&self) -> usize {
        self.frets.iter().filter(|f| f.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used() == 0
    }
}

impl Index<usize> for Tab {
    type Output = Option<u8>;

    fn index(&self, string: usize) -> &Self::Output {
        &self.frets[string]
    }
}
