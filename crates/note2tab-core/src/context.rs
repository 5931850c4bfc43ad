//! The notation state a note is read under.

use crate::pitch::{Clef, KeySignature};

/// Clef, key signature and transposition applied while resolving notes.
///
/// The command line builds one of these up flag by flag; every note token is
/// resolved against the context as it stands at that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub clef: Clef,
    pub key: KeySignature,
    /// Transposition in chromatic half-steps; negative moves down.
    pub shift: i32,
}

impl Context {
    #[must_use]
    pub fn new(clef: Clef) -> Self {
        Self {
            clef,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: KeySignature) -> Self {
        self.key = key;
        self
    }

    #[must_use]
    pub fn with_shift(mut self, shift: i32) -> Self {
        self.shift = shift;
        self
    }
}
