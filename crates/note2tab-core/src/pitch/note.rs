//! Resolution of note tokens into pitch class and staff position.
//!
//! A note token is an optional accidental marker followed by a signed staff
//! position: `3`, `-2`, `#4`, `b5`, `%3`. The marker `%` forces a natural and
//! suppresses the key signature for that note.

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::pitch::PitchClass;

/// An explicit accidental marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Flat,
    Sharp,
    /// Forces the natural, ignoring the key signature.
    Natural,
}

impl Accidental {
    #[must_use]
    pub const fn semitones(self) -> i32 {
        match self {
            Self::Flat => -1,
            Self::Sharp => 1,
            Self::Natural => 0,
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Flat),
            '#' => Some(Self::Sharp),
            '%' => Some(Self::Natural),
            _ => None,
        }
    }
}

/// The accidental a note ended up with after the key signature was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alteration {
    /// Net semitones from the marker and the key signature combined.
    Semitones(i32),
    /// Natural forced with `%`; the key signature was not consulted.
    ForcedNatural,
}

impl Default for Alteration {
    fn default() -> Self {
        Self::Semitones(0)
    }
}

/// A resolved note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Staff position after accidentals and shift. Encodes the octave.
    pub pos: i32,
    pub acc: Alteration,
    pub name: PitchClass,
}

impl Note {
    /// The natural note at a staff position with no accidental.
    #[must_use]
    pub const fn natural(pos: i32, name: PitchClass) -> Self {
        Self {
            pos,
            acc: Alteration::Semitones(0),
            name,
        }
    }

    /// Resolves a note token under the given clef, key and shift.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAccidental`] when no number follows the
    /// optional marker, and [`Error::InvalidPosition`] for an empty token or
    /// a position that does not parse as an integer.
    pub fn resolve(token: &str, ctx: &Context) -> Result<Self> {
        let (marker, digits) = split_marker(token)?;
        let pos: i32 = digits
            .parse()
            .map_err(|_| Error::InvalidPosition(token.to_string()))?;

        let acc = match marker {
            Some(Accidental::Natural) => Alteration::ForcedNatural,
            marker => Alteration::Semitones(
                marker.map_or(0, Accidental::semitones) + ctx.key.adjustment_for(pos),
            ),
        };

        let mut note = Self {
            pos,
            acc,
            name: ctx.clef.degree(pos),
        };
        if let Alteration::Semitones(semitones) = acc {
            note.alter(semitones);
        }
        let note = note.transpose(ctx.shift);

        log::debug!(
            "Resolved '{}' to {} at position {} ({:?})",
            token,
            note.name,
            note.pos,
            note.acc
        );
        Ok(note)
    }

    /// Moves the note by chromatic half-steps. Each step that lands on a
    /// natural moves `pos` one place in the direction of the shift.
    #[must_use]
    pub fn transpose(mut self, semitones: i32) -> Self {
        let octaves = semitones / 12;
        self.pos = self.pos.saturating_add(octaves.saturating_mul(7));
        let direction = semitones.signum();
        for _ in 0..(semitones % 12).abs() {
            self.name = self.name.step(direction);
            if self.name.is_natural() {
                self.pos = self.pos.saturating_add(direction);
            }
            log::trace!("Stepped to {} at position {}", self.name, self.pos);
        }
        self
    }

    /// Applies a written accidental. Every flat lowers `pos`; a sharp raises
    /// it only when it lands on a natural.
    fn alter(&mut self, semitones: i32) {
        for _ in 0..semitones.unsigned_abs() {
            if semitones < 0 {
                self.name = self.name.step(-1);
                self.pos = self.pos.saturating_sub(1);
            } else {
                self.name = self.name.step(1);
                if self.name.is_natural() {
                    self.pos = self.pos.saturating_add(1);
                }
            }
        }
    }
}

/// Splits an optional leading marker off a note token.
fn split_marker(token: &str) -> Result<(Option<Accidental>, &str)> {
    let Some(first) = token.chars().next() else {
        return Err(Error::InvalidPosition(token.to_string()));
    };
    let (marker, rest) = match Accidental::from_marker(first) {
        Some(marker) => (Some(marker), &token[first.len_utf8()..]),
        None => (None, token),
    };

    let digits = rest.strip_prefix('-').unwrap_or(rest);
    if digits.starts_with(|c: char| c.is_ascii_digit()) {
        Ok((marker, rest))
    } else {
        Err(Error::InvalidAccidental(first))
    }
}
