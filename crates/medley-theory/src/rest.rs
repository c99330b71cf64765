//! Silent score element.

use std::fmt;

use serde::Serialize;

use crate::duration::{Duration, NoteValue};
use crate::element::ScoreElement;
use crate::error::RangeError;

/// A duration of silence. Its volume is always 0 and cannot be changed.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Rest {
    element: ScoreElement,
}

impl Rest {
    pub fn new(duration: Duration) -> Self {
        Self {
            element: ScoreElement::silent(duration),
        }
    }

    pub fn duration(&self) -> Duration {
        self.element.duration()
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.element.set_duration(duration);
    }

    pub fn value(&self) -> NoteValue {
        self.element.value()
    }

    pub fn set_value(&mut self, value: NoteValue) {
        self.element.set_value(value);
    }

    pub fn dots(&self) -> u8 {
        self.element.dots()
    }

    pub fn set_dots(&mut self, dots: i32) -> Result<(), RangeError> {
        self.element.set_dots(dots)
    }

    pub fn duration_value(&self) -> f64 {
        self.element.duration_value()
    }

    pub fn volume(&self) -> u8 {
        self.element.volume()
    }
}

impl Default for Rest {
    fn default() -> Self {
        Self::new(Duration::default())
    }
}

impl PartialEq for Rest {
    fn eq(&self, other: &Self) -> bool {
        self.duration() == other.duration()
    }
}

impl Eq for Rest {}

impl fmt::Display for Rest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rest ({})", self.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_is_silent() {
        let rest = Rest::new(Duration::new(NoteValue::Crotchet));
        assert_eq!(rest.volume(), 0);
        assert_eq!(rest.duration_value(), 0.25);
    }

    #[test]
    fn test_rest_duration_mutators() {
        let mut rest = Rest::default();
        assert_eq!(rest.value(), NoteValue::Minim);
        rest.set_dots(1).unwrap();
        assert_eq!(rest.duration_value(), 0.75);
        assert!(rest.set_dots(5).is_err());
        assert_eq!(rest.dots(), 1);
        rest.set_duration(Duration::new(NoteValue::Semibreve));
        assert_eq!(rest.duration_value(), 1.0);
        assert_eq!(rest.volume(), 0);
    }

    #[test]
    fn test_rest_equality_and_display() {
        let a = Rest::new(Duration::with_dots(NoteValue::Quaver, 2).unwrap());
        let b = Rest::new(Duration::with_dots(NoteValue::Quaver, 2).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, Rest::default());
        assert_eq!(a.to_string(), "Rest (Quaver with 2 dots)");
    }
}
