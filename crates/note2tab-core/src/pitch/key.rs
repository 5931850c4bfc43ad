//! Key signatures given on the command line.
//!
//! A key spec is a space-separated list of accidentals, each a `b` or `#`
//! followed by the staff position (0-11) it applies to, e.g. `"#2 #5"`.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::pitch::Accidental;

/// Maximum number of accidentals in one key signature.
pub const MAX_ACCIDENTALS: usize = 9;

/// One accidental of a key signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyAccidental {
    pub accidental: Accidental,
    /// Staff position as written, in `0..=11`.
    pub pos: i32,
}

impl KeyAccidental {
    /// Whether this accidental applies to a note at `pos` in any octave.
    #[must_use]
    pub fn matches(&self, pos: i32) -> bool {
        (pos - self.pos).rem_euclid(7) == 0
    }
}

impl FromStr for KeyAccidental {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let accidental = match chars.next() {
            Some('b') => Accidental::Flat,
            Some('#') => Accidental::Sharp,
            Some(c) => return Err(Error::InvalidKeyToken(c)),
            None => return Err(Error::InvalidKeyPosition(token.to_string())),
        };
        let pos: i64 = chars
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidKeyPosition(token.to_string()))?;
        if !(0..=11).contains(&pos) {
            return Err(Error::KeyPositionOutOfRange(pos));
        }
        Ok(Self {
            accidental,
            // checked to be in 0..=11 above
            pos: i32::try_from(pos).map_err(|_| Error::KeyPositionOutOfRange(pos))?,
        })
    }
}

/// An ordered set of at most [`MAX_ACCIDENTALS`] accidentals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySignature {
    accidentals: Vec<KeyAccidental>,
}

impl KeySignature {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accidental, failing once the signature is full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyAccidentals`] when the key already holds
    /// [`MAX_ACCIDENTALS`] entries.
    pub fn push(&mut self, accidental: KeyAccidental) -> Result<()> {
        if self.accidentals.len() >= MAX_ACCIDENTALS {
            return Err(Error::TooManyAccidentals {
                max: MAX_ACCIDENTALS,
            });
        }
        self.accidentals.push(accidental);
        Ok(())
    }

    /// Semitone adjustment the key applies to a note at `pos`.
    ///
    /// Only the first matching entry counts.
    #[must_use]
    pub fn adjustment_for(&self, pos: i32) -> i32 {
        self.accidentals
            .iter()
            .find(|a| a.matches(pos))
            .map_or(0, |a| a.accidental.semitones())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accidentals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accidentals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyAccidental> {
        self.accidentals.iter()
    }
}

impl FromStr for KeySignature {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let mut key = Self::new();
        for token in spec.split_whitespace() {
            key.push(token.parse()?)?;
        }
        log::debug!("Key signature defined with {} accidentals", key.len());
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        let key: KeySignature = "#3 b6".parse().unwrap();
        let entries: Vec<_> = key.iter().copied().collect();
        assert_eq!(
            entries,
            vec![
                KeyAccidental {
                    accidental: Accidental::Sharp,
                    pos: 3
                },
                KeyAccidental {
                    accidental: Accidental::Flat,
                    pos: 6
                },
            ]
        );
    }

    #[test]
    fn test_parse_empty_key() {
        let key: KeySignature = "".parse().unwrap();
        assert!(key.is_empty());
    }

    #[test]
    fn test_invalid_accidental() {
        assert_eq!(
            "%3".parse::<KeySignature>(),
            Err(Error::InvalidKeyToken('%'))
        );
    }

    #[test]
    fn test_position_out_of_range() {
        assert_eq!(
            "#12".parse::<KeySignature>(),
            Err(Error::KeyPositionOutOfRange(12))
        );
        assert_eq!(
            "b-1".parse::<KeySignature>(),
            Err(Error::KeyPositionOutOfRange(-1))
        );
    }

    #[test]
    fn test_position_not_a_number() {
        assert_eq!(
            "#x".parse::<KeySignature>(),
            Err(Error::InvalidKeyPosition("#x".to_string()))
        );
    }

    #[test]
    fn test_too_many_accidentals() {
        let spec = "#0 #1 #2 #3 #4 #5 #6 #7 #8 #9";
        assert_eq!(
            spec.parse::<KeySignature>(),
            Err(Error::TooManyAccidentals { max: 9 })
        );
        assert!("#0 #1 #2 #3 #4 #5 #6 #7 #8".parse::<KeySignature>().is_ok());
    }

    #[test]
    fn test_adjustment_any_octave() {
        let key: KeySignature = "#3".parse().unwrap();
        assert_eq!(key.adjustment_for(3), 1);
        assert_eq!(key.adjustment_for(10), 1);
        assert_eq!(key.adjustment_for(-4), 1);
        assert_eq!(key.adjustment_for(4), 0);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let key: KeySignature = "b1 #8".parse().unwrap();
        assert_eq!(key.adjustment_for(8), -1);
    }
}
