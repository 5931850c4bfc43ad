pub mod key;
pub mod note;
pub mod scale;

pub use key::{KeyAccidental, KeySignature, MAX_ACCIDENTALS};
pub use note::{Accidental, Alteration, Note};
pub use scale::{Clef, PitchClass};
