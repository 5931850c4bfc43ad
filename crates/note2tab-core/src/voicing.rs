//! Chord voicing search.
//!
//! The search is greedy. For a starting string `k = 0, 1, ...` every chord
//! note, lowest first, takes the first free string at or above `k` on which
//! it is playable. The first `k` at which some note finds no free string ends
//! the search, even if a later `k` would have worked. Valid fingerings can be
//! missed this way.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::fretboard::{Fretboard, Tab, STRINGS};
use crate::pitch::{Clef, Note};

/// Maximum number of notes in a chord, one per string.
pub const MAX_NOTES: usize = STRINGS;

/// Up to [`MAX_NOTES`] resolved notes played together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves every note of a chord token such as `(0 2 4)`.
    ///
    /// Notes are separated by spaces or `)`; the leading `(` is optional.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error, or [`Error::ChordTooLarge`] for a
    /// seventh note.
    pub fn parse(token: &str, ctx: &Context) -> Result<Self> {
        let body = token.strip_prefix('(').unwrap_or(token);
        let mut chord = Self::new();
        for piece in body.split([' ', ')']).filter(|p| !p.is_empty()) {
            if chord.is_full() {
                return Err(Error::ChordTooLarge { max: MAX_NOTES });
            }
            chord.push(Note::resolve(piece, ctx)?)?;
        }
        Ok(chord)
    }

    /// Adds a note.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChordTooLarge`] when the chord already has
    /// [`MAX_NOTES`] notes.
    pub fn push(&mut self, note: Note) -> Result<()> {
        if self.is_full() {
            return Err(Error::ChordTooLarge { max: MAX_NOTES });
        }
        self.notes.push(note);
        Ok(())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.notes.len() >= MAX_NOTES
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Voicings of this chord, tightest first.
    #[must_use]
    pub fn voicings(&self, clef: Clef) -> Voicings {
        let mut notes = self.notes.clone();
        notes.sort_by_key(|n| n.pos);
        let board = Fretboard::new(clef);
        Voicings {
            clef,
            tabs: notes.iter().map(|n| board.map(n)).collect(),
            start: 0,
            done: notes.is_empty(),
        }
    }
}

/// Lazy sequence of voicings produced by [`Chord::voicings`].
#[derive(Debug, Clone)]
pub struct Voicings {
    clef: Clef,
    /// Per-note fret maps, in ascending position order.
    tabs: Vec<Tab>,
    start: usize,
    done: bool,
}

impl Voicings {
    /// Assigns every note to a string at or above `start`.
    fn assign(&self, start: usize) -> Tab {
        let mut voicing = Tab::default();
        for tab in &self.tabs {
            let free = (start..STRINGS).find(|&s| voicing[s].is_none() && tab[s].is_some());
            if let Some(string) = free {
                voicing.set(string, tab[string]);
            }
        }
        voicing
    }
}

impl Iterator for Voicings {
    type Item = Tab;

    fn next(&mut self) -> Option<Tab> {
        if self.done || STRINGS - self.start < self.tabs.len() {
            return None;
        }
        let voicing = self.assign(self.start);
        if voicing.used() < self.tabs.len() {
            log::debug!(
                "Voicing search for {} notes stopped at string {} under {} clef",
                self.tabs.len(),
                self.start,
                self.clef
            );
            self.done = true;
            return None;
        }
        log::debug!("Voicing from string {}: {:?}", self.start, voicing.frets());
        self.start += 1;
        Some(voicing)
    }
}
