//! Note notation parsing.
//!
//! Grammar: a letter `A`-`G` (either case), an optional accidental (`b` flat or
//! `#` sharp) and an optional, possibly negative, octave number. Missing parts
//! default to a natural in octave 4.
//!
//! ```
//! use medley_theory::parser::parse_pitch;
//! use medley_theory::{Accidental, LetterName};
//!
//! let pitch = parse_pitch("C#4").unwrap();
//! assert_eq!(pitch.tone.letter(), LetterName::C);
//! assert_eq!(pitch.tone.accidental(), Accidental::Sharp);
//! assert_eq!(pitch.octave, 4);
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::element::{DEFAULT_ACCIDENTAL, DEFAULT_OCTAVE};
use crate::error::FormatError;
use crate::tone::{Accidental, LetterName, Tone};

/// Whole-string note pattern. Several accidental characters pass this check
/// and are then rejected when the octave suffix is read.
const NOTE_PATTERN: &str = r"^[A-Ga-g][b#]*-?[0-9]*$";

/// An octave suffix on its own.
const OCTAVE_PATTERN: &str = r"^-?[0-9]+$";

static NOTE_REGEX: OnceLock<Regex> = OnceLock::new();
static OCTAVE_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_regex() -> &'static Regex {
    NOTE_REGEX.get_or_init(|| Regex::new(NOTE_PATTERN).expect("invalid regex pattern"))
}

fn octave_regex() -> &'static Regex {
    OCTAVE_REGEX.get_or_init(|| Regex::new(OCTAVE_PATTERN).expect("invalid regex pattern"))
}

/// A tone placed in an octave, as read from notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedPitch {
    pub tone: Tone,
    pub octave: i32,
}

/// Reads a single letter token.
pub fn parse_letter(token: &str) -> Result<LetterName, FormatError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            LetterName::from_char(c).ok_or_else(|| FormatError::InvalidName(token.to_string()))
        }
        _ => Err(FormatError::InvalidName(token.to_string())),
    }
}

/// Reads a single accidental token (`b` or `#`).
pub fn parse_accidental(token: &str) -> Result<Accidental, FormatError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Accidental::from_notation(c)
            .ok_or_else(|| FormatError::InvalidAccidental(token.to_string())),
        _ => Err(FormatError::InvalidAccidental(token.to_string())),
    }
}

fn parse_octave(token: &str) -> Result<i32, FormatError> {
    token
        .parse()
        .map_err(|_| FormatError::InvalidOctave(token.to_string()))
}

/// Parses note notation such as `C4`, `C#4`, `Bb` or `A-1`.
pub fn parse_pitch(text: &str) -> Result<ParsedPitch, FormatError> {
    if !note_regex().is_match(text) {
        return Err(FormatError::InvalidNote(text.to_string()));
    }

    // The pattern admits only ASCII, so byte offsets are character offsets.
    let letter = parse_letter(&text[..1])?;
    let rest = &text[1..];

    if rest.is_empty() {
        return Ok(ParsedPitch {
            tone: Tone::new(letter, DEFAULT_ACCIDENTAL),
            octave: DEFAULT_OCTAVE,
        });
    }

    if octave_regex().is_match(rest) {
        return Ok(ParsedPitch {
            tone: Tone::new(letter, DEFAULT_ACCIDENTAL),
            octave: parse_octave(rest)?,
        });
    }

    let accidental = parse_accidental(&rest[..1])?;
    let suffix = &rest[1..];
    let octave = if suffix.is_empty() {
        DEFAULT_OCTAVE
    } else {
        parse_octave(suffix)?
    };

    Ok(ParsedPitch {
        tone: Tone::new(letter, accidental),
        octave,
    })
}
