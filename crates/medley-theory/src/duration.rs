//! Note values and dotted durations.
//!
//! Durations are measured in whole notes: a semibreve is `1.0`, a crotchet `0.25`.
//! Each dot adds half of the previous addition, up to three dots.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, RangeError};
use crate::validation;

/// Undotted note value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteValue {
    Breve,
    Semibreve,
    Minim,
    Crotchet,
    Quaver,
    Semiquaver,
    Demisemiquaver,
    Hemidemisemiquaver,
}

impl NoteValue {
    /// All note values from longest to shortest.
    pub const ALL: [NoteValue; 8] = [
        NoteValue::Breve,
        NoteValue::Semibreve,
        NoteValue::Minim,
        NoteValue::Crotchet,
        NoteValue::Quaver,
        NoteValue::Semiquaver,
        NoteValue::Demisemiquaver,
        NoteValue::Hemidemisemiquaver,
    ];

    /// Length in whole notes.
    pub fn base_value(self) -> f64 {
        match self {
            NoteValue::Breve => 2.0,
            NoteValue::Semibreve => 1.0,
            NoteValue::Minim => 1.0 / 2.0,
            NoteValue::Crotchet => 1.0 / 4.0,
            NoteValue::Quaver => 1.0 / 8.0,
            NoteValue::Semiquaver => 1.0 / 16.0,
            NoteValue::Demisemiquaver => 1.0 / 32.0,
            NoteValue::Hemidemisemiquaver => 1.0 / 64.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NoteValue::Breve => "Breve",
            NoteValue::Semibreve => "Semibreve",
            NoteValue::Minim => "Minim",
            NoteValue::Crotchet => "Crotchet",
            NoteValue::Quaver => "Quaver",
            NoteValue::Semiquaver => "Semiquaver",
            NoteValue::Demisemiquaver => "Demisemiquaver",
            NoteValue::Hemidemisemiquaver => "Hemidemisemiquaver",
        }
    }
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteValue {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteValue::ALL
            .into_iter()
            .find(|value| value.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::InvalidNoteValue(s.to_string()))
    }
}

/// Fraction of the base value added by each dot count.
const DOT_INCREMENTS: [f64; 4] = [0.0, 0.5, 0.5 + 0.25, 0.5 + 0.25 + 0.125];

/// Length of `value` carrying `dots` dots, in whole notes.
///
/// Returns `None` when `dots` is above three.
pub fn duration_value(value: NoteValue, dots: u8) -> Option<f64> {
    DOT_INCREMENTS
        .get(dots as usize)
        .map(|increment| dotted(value, *increment))
}

fn dotted(value: NoteValue, increment: f64) -> f64 {
    let base = value.base_value();
    base + base * increment
}

/// A note value plus 0-3 dots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "DurationRecord")]
pub struct Duration {
    value: NoteValue,
    dots: u8,
}

impl Duration {
    /// Undotted duration.
    pub fn new(value: NoteValue) -> Self {
        Self {
            value,
            dots: crate::element::DEFAULT_DOTS,
        }
    }

    /// Dotted duration. Fails unless `0 <= dots <= 3`.
    pub fn with_dots(value: NoteValue, dots: i32) -> Result<Self, RangeError> {
        validation::dots(dots)?;
        Ok(Self {
            value,
            dots: dots as u8,
        })
    }

    pub fn value(&self) -> NoteValue {
        self.value
    }

    pub fn set_value(&mut self, value: NoteValue) {
        self.value = value;
    }

    pub fn dots(&self) -> u8 {
        self.dots
    }

    /// Replaces the dot count. The duration is unchanged on failure.
    pub fn set_dots(&mut self, dots: i32) -> Result<(), RangeError> {
        validation::dots(dots)?;
        self.dots = dots as u8;
        Ok(())
    }

    /// Length in whole notes, dots included.
    pub fn duration_value(&self) -> f64 {
        dotted(self.value, DOT_INCREMENTS[self.dots as usize])
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::new(crate::element::DEFAULT_VALUE)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.duration_value() == other.duration_value()
            && self.value == other.value
            && self.dots == other.dots
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.dots.hash(state);
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        match self.dots {
            0 => Ok(()),
            1 => write!(f, " with 1 dot"),
            n => write!(f, " with {} dots", n),
        }
    }
}

#[derive(Deserialize)]
struct DurationRecord {
    value: NoteValue,
    #[serde(default)]
    dots: i32,
}

impl TryFrom<DurationRecord> for Duration {
    type Error = RangeError;

    fn try_from(record: DurationRecord) -> Result<Self, Self::Error> {
        Duration::with_dots(record.value, record.dots)
    }
}
