use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("'{0}': Invalid accidental")]
    InvalidAccidental(char),

    #[error("'{0}': Invalid note position")]
    InvalidPosition(String),

    #[error("'{0}': Invalid clef")]
    InvalidClef(String),

    #[error("'{0}': invalid accidental in key")]
    InvalidKeyToken(char),

    #[error("'{0}': Invalid key position")]
    InvalidKeyPosition(String),

    #[error("{0} out of range")]
    KeyPositionOutOfRange(i64),

    #[error("Too many accidentals (at most {max})")]
    TooManyAccidentals { max: usize },

    #[error("A chord must not exceed {max} notes")]
    ChordTooLarge { max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
