//! Duration and volume shared by every score element, plus crate defaults.

use serde::Serialize;

use crate::duration::{Duration, NoteValue};
use crate::error::RangeError;
use crate::tone::Accidental;
use crate::validation;

/// Octave used when notation omits one.
pub const DEFAULT_OCTAVE: i32 = 4;
/// Accidental used when notation omits one.
pub const DEFAULT_ACCIDENTAL: Accidental = Accidental::Natural;
/// Note value of a default duration.
pub const DEFAULT_VALUE: NoteValue = NoteValue::Minim;
/// Dots of a default duration.
pub const DEFAULT_DOTS: u8 = 0;
/// Volume of a newly built note.
pub const DEFAULT_VOLUME: u8 = 98;

/// A duration played at a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreElement {
    duration: Duration,
    volume: u8,
}

impl ScoreElement {
    /// Element with the given duration and volume. Fails unless `0 <= volume <= 127`.
    pub fn new(duration: Duration, volume: i32) -> Result<Self, RangeError> {
        validation::volume(volume)?;
        Ok(Self {
            duration,
            volume: volume as u8,
        })
    }

    /// Element that makes no sound.
    pub(crate) fn silent(duration: Duration) -> Self {
        Self {
            duration,
            volume: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn value(&self) -> NoteValue {
        self.duration.value()
    }

    pub fn set_value(&mut self, value: NoteValue) {
        self.duration.set_value(value);
    }

    pub fn dots(&self) -> u8 {
        self.duration.dots()
    }

    pub fn set_dots(&mut self, dots: i32) -> Result<(), RangeError> {
        self.duration.set_dots(dots)
    }

    pub fn duration_value(&self) -> f64 {
        self.duration.duration_value()
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Replaces the volume. The element is unchanged on failure.
    pub fn set_volume(&mut self, volume: i32) -> Result<(), RangeError> {
        validation::volume(volume)?;
        self.volume = volume as u8;
        Ok(())
    }
}

impl Default for ScoreElement {
    fn default() -> Self {
        Self {
            duration: Duration::default(),
            volume: DEFAULT_VOLUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let element = ScoreElement::default();
        assert_eq!(element.value(), DEFAULT_VALUE);
        assert_eq!(element.dots(), DEFAULT_DOTS);
        assert_eq!(element.volume(), DEFAULT_VOLUME);
        assert_eq!(element.duration_value(), 0.5);
    }

    #[test]
    fn test_new_validates_volume() {
        assert!(ScoreElement::new(Duration::default(), 127).is_ok());
        assert!(ScoreElement::new(Duration::default(), 128).is_err());
        assert!(ScoreElement::new(Duration::default(), -1).is_err());
    }

    #[test]
    fn test_mutators() {
        let mut element = ScoreElement::default();
        element.set_value(NoteValue::Crotchet);
        element.set_dots(2).unwrap();
        assert_eq!(element.duration_value(), 0.4375);

        assert!(element.set_volume(200).is_err());
        assert_eq!(element.volume(), DEFAULT_VOLUME);
        element.set_volume(64).unwrap();
        assert_eq!(element.volume(), 64);

        assert!(element.set_dots(4).is_err());
        assert_eq!(element.dots(), 2);
    }
}
