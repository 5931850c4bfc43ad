//! Core of note2tab.
//!
//! This crate turns staff note positions (scale degrees with optional
//! accidentals) into guitar tablature. It resolves each note to a chromatic
//! pitch class and staff position under a clef, key signature and
//! transposition, finds the fret for that note on every string of a
//! standard-tuned guitar, and searches playable voicings for chords.
//!
//! # Example
//!
//! ```
//! use note2tab_core::{Context, Fretboard, Note, RenderMode};
//!
//! let ctx = Context::default();
//! let note = Note::resolve("0", &ctx).unwrap();
//! let tab = Fretboard::new(ctx.clef).map(&note);
//! assert_eq!(tab.display(RenderMode::OneLine).to_string(), "E10 A5 D0 \n");
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod error;
pub mod fretboard;
pub mod pitch;
pub mod render;
pub mod voicing;

pub use context::Context;
pub use error::{Error, Result};
pub use fretboard::{Fretboard, Tab, Tuning};
pub use pitch::{Accidental, Alteration, Clef, KeySignature, Note, PitchClass};
pub use render::RenderMode;
pub use voicing::{Chord, Voicings};
