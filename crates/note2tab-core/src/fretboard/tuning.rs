//! The fixed standard guitar tuning.

use crate::pitch::{Clef, Note, PitchClass};

/// Number of strings on the instrument.
pub const STRINGS: usize = 6;

/// Frets searched on each string, open string included.
pub const FRETS: u8 = 24;

/// One open string: its label in the tab and the note it sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenString {
    pub label: char,
    /// Open note in treble-clef numbering.
    pub note: Note,
}

/// Open strings, lowest pitch first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    strings: [OpenString; STRINGS],
}

impl Tuning {
    /// E A D G B e, with position 0 on the open D string.
    pub const STANDARD: Self = Self {
        strings: [
            OpenString {
                label: 'E',
                note: Note::natural(-6, PitchClass::E),
            },
            OpenString {
                label: 'A',
                note: Note::natural(-3, PitchClass::A),
            },
            OpenString {
                label: 'D',
                note: Note::natural(0, PitchClass::D),
            },
            OpenString {
                label: 'G',
                note: Note::natural(3, PitchClass::G),
            },
            OpenString {
                label: 'B',
                note: Note::natural(5, PitchClass::H),
            },
            OpenString {
                label: 'e',
                note: Note::natural(8, PitchClass::E),
            },
        ],
    };

    #[must_use]
    pub const fn strings(&self) -> &[OpenString; STRINGS] {
        &self.strings
    }

    #[must_use]
    pub const fn label(&self, string: usize) -> char {
        self.strings[string].label
    }

    /// The open note of `string` in the numbering of `clef`.
    #[must_use]
    pub const fn open_note(&self, string: usize, clef: Clef) -> Note {
        let mut note = self.strings[string].note;
        note.pos += clef.fretboard_offset();
        note
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::STANDARD
    }
}
