//! Medley Music Theory Values
//!
//! This crate models pitches, note durations and the arithmetic that relates
//! frequencies, MIDI numbers, piano keys and pitch classes. It also parses the
//! compact note notation used across Medley (`C#4`, `Bb`, `A-1`).
//!
//! # Example
//!
//! ```
//! use medley_theory::{Accidental, Duration, LetterName, Note, NoteValue};
//!
//! let mut note: Note = "C4".parse().unwrap();
//! assert_eq!(note.midi_number(), 60);
//!
//! // Respelling C as B-sharp moves the written octave down.
//! note.switch_accidental();
//! assert_eq!((note.name(), note.accidental(), note.octave()), (LetterName::B, Accidental::Sharp, 3));
//!
//! let dotted = Duration::with_dots(NoteValue::Crotchet, 1).unwrap();
//! assert_eq!(dotted.duration_value(), 0.375);
//! ```
//!
//! # Modules
//!
//! - [`frequency`]: Frequency, MIDI number, piano key and cents conversions
//! - [`tone`]: Letter names, accidentals and the enharmonic tone table
//! - [`duration`]: Note values and dotted durations
//! - [`parser`]: Note notation grammar
//! - [`note`] / [`rest`]: Score elements built on the values above
//! - [`validation`]: Range guards shared by every constructor
//! - [`error`]: Range and format errors

pub mod duration;
pub mod element;
pub mod error;
pub mod frequency;
pub mod note;
pub mod parser;
pub mod rest;
pub mod tone;
pub mod validation;

// Re-export main types
pub use duration::{Duration, NoteValue};
pub use element::ScoreElement;
pub use error::{Error, FormatError, RangeError, Result};
pub use note::Note;
pub use parser::{parse_pitch, ParsedPitch};
pub use rest::Rest;
pub use tone::{Accidental, LetterName, Spelling, Tone};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
