//! Error types for pitch math, value construction and notation parsing.

use thiserror::Error;

/// A numeric argument fell outside its documented bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Frequency outside the window accepted by the requested conversion.
    #[error("Invalid frequency value! It must be a positive double between {min:.2} and {max:.2} (got {value}).")]
    Frequency { value: f64, min: f64, max: f64 },

    /// MIDI note number outside 0-127.
    #[error("Invalid MIDI note number value! It must be a positive integer between {min} and {max} (got {value}).")]
    MidiNumber { value: i32, min: i32, max: i32 },

    /// Piano key number outside 1-88.
    #[error("Invalid piano key number value! It must be a positive integer between {min} and {max} (got {value}).")]
    PianoKey { value: i32, min: i32, max: i32 },

    /// Volume outside 0-127.
    #[error("Invalid volume value! It must be a positive integer between {min} and {max} (got {value}).")]
    Volume { value: i32, min: i32, max: i32 },

    /// Dot count outside 0-3.
    #[error("Invalid dots number! It must be a positive integer between {min} and {max} (got {value}).")]
    Dots { value: i32, min: i32, max: i32 },

    /// Semitone count outside a caller-supplied window.
    #[error("Invalid semitones value! It must be an integer between {min} and {max} (got {value}).")]
    Semitones { value: i32, min: i32, max: i32 },

    /// A transposition would push the MIDI number out of 0-127.
    #[error(
        "Invalid semitones value! For this note it must be a value between -{midi_number} and +{}.",
        crate::validation::MIDI_MAX_NUMBER - .midi_number
    )]
    Transpose { midi_number: i32, semitones: i32 },
}

/// A notation string or token is not part of the recognized alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The whole string does not match the note grammar.
    #[error("Invalid note: '{0}'")]
    InvalidNote(String),

    /// The letter token is not one of A-G.
    #[error("Invalid note name: '{0}'")]
    InvalidName(String),

    /// The accidental token is not `b` or `#`.
    #[error("Invalid note accidental: '{0}'")]
    InvalidAccidental(String),

    /// The octave suffix is not an integer.
    #[error("Invalid note octave: '{0}'")]
    InvalidOctave(String),

    /// The note value name is not one of breve through hemidemisemiquaver.
    #[error("Invalid note value: '{0}'")]
    InvalidNoteValue(String),
}

/// Any failure raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result alias for crate operations that may fail with either taxonomy.
pub type Result<T> = std::result::Result<T, Error>;
