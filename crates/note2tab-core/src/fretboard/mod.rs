//! Mapping resolved notes onto the strings of a guitar.
//!
//! Each string is walked upwards from its open note one fret at a time. A
//! fret matches only when both pitch class and staff position agree with the
//! note, so the same pitch class in another octave does not match.

pub mod tab;
pub mod tuning;

pub use tab::Tab;
pub use tuning::{OpenString, Tuning, FRETS, STRINGS};

use crate::pitch::{Clef, Note};

/// Finds frets for notes under a clef on a tuned fretboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fretboard {
    clef: Clef,
    tuning: Tuning,
}

impl Fretboard {
    #[must_use]
    pub const fn new(clef: Clef) -> Self {
        Self {
            clef,
            tuning: Tuning::STANDARD,
        }
    }

    #[must_use]
    pub const fn clef(&self) -> Clef {
        self.clef
    }

    #[must_use]
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The lowest fret producing `note` on every string.
    #[must_use]
    pub fn map(&self, note: &Note) -> Tab {
        let mut tab = Tab::default();
        for string in 0..STRINGS {
            tab.set(string, self.find_fret(string, note));
        }
        log::debug!("Mapped {} at position {} to {:?}", note.name, note.pos, tab.frets());
        tab
    }

    fn find_fret(&self, string: usize, note: &Note) -> Option<u8> {
        let mut current = self.tuning.open_note(string, self.clef);
        for fret in 0..FRETS {
            if current.name == note.name && current.pos == note.pos {
                return Some(fret);
            }
            current = current.transpose(1);
        }
        None
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::new(Clef::default())
    }
}
