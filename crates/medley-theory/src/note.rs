//! Pitched score element.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::duration::{Duration, NoteValue};
use crate::element::{ScoreElement, DEFAULT_VOLUME};
use crate::error::{Error, RangeError};
use crate::frequency;
use crate::parser;
use crate::tone::{Accidental, LetterName, Spelling, Tone};
use crate::validation;

/// Octave change implied by respelling a tone across the C/B boundary.
///
/// C♮ becomes B♯ of the octave below, and B♯ becomes C♮ of the octave above.
/// Every other respelling keeps the octave.
pub fn respelling_octave_shift(before: Spelling, after: Spelling) -> i32 {
    let c_natural = Spelling {
        letter: LetterName::C,
        accidental: Accidental::Natural,
    };
    let b_sharp = Spelling {
        letter: LetterName::B,
        accidental: Accidental::Sharp,
    };
    if before == c_natural && after == b_sharp {
        -1
    } else if before == b_sharp && after == c_natural {
        1
    } else {
        0
    }
}

/// A tone in an octave with a duration and a volume.
///
/// Notes built from an arbitrary frequency keep that frequency verbatim while
/// the MIDI number, tone and octave describe the nearest semitone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Note {
    frequency: f64,
    midi_number: u8,
    tone: Tone,
    octave: i32,
    #[serde(flatten)]
    element: ScoreElement,
}

impl Note {
    /// Note at `frequency` with the default duration and volume.
    pub fn from_frequency(frequency: f64) -> Result<Self, RangeError> {
        Self::from_frequency_with(frequency, Duration::default(), DEFAULT_VOLUME as i32)
    }

    pub fn from_frequency_with(
        frequency: f64,
        duration: Duration,
        volume: i32,
    ) -> Result<Self, RangeError> {
        let element = ScoreElement::new(duration, volume)?;
        let midi_number = frequency::midi_number_from_frequency(frequency)?;
        Ok(Self {
            frequency,
            midi_number,
            tone: Tone::from_midi_number(midi_number as i32)?,
            octave: octave_of(midi_number),
            element,
        })
    }

    /// Note for `midi_number` with the default duration and volume.
    pub fn from_midi_number(midi_number: i32) -> Result<Self, RangeError> {
        Self::from_midi_number_with(midi_number, Duration::default(), DEFAULT_VOLUME as i32)
    }

    pub fn from_midi_number_with(
        midi_number: i32,
        duration: Duration,
        volume: i32,
    ) -> Result<Self, RangeError> {
        let element = ScoreElement::new(duration, volume)?;
        Self::on_grid(midi_number, element)
    }

    /// Note for `tone` in `octave` with the default duration and volume.
    ///
    /// The MIDI number is `pitch_class + 12 * (octave + 1)`, so `C-1` is 0 and
    /// `A4` is 69.
    pub fn from_tone(tone: Tone, octave: i32) -> Result<Self, RangeError> {
        Self::from_tone_with(tone, octave, Duration::default(), DEFAULT_VOLUME as i32)
    }

    pub fn from_tone_with(
        tone: Tone,
        octave: i32,
        duration: Duration,
        volume: i32,
    ) -> Result<Self, RangeError> {
        let element = ScoreElement::new(duration, volume)?;
        let midi_number = tone.pitch_class() as i64 + 12 * (octave as i64 + 1);
        let midi_number = midi_number.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let frequency = frequency::frequency_from_midi_number(midi_number)?;
        Ok(Self {
            frequency,
            midi_number: midi_number as u8,
            tone,
            octave,
            element,
        })
    }

    /// Note for notation text such as `C#4`, with the given duration and volume.
    pub fn from_notation_with(
        text: &str,
        duration: Duration,
        volume: i32,
    ) -> crate::Result<Self> {
        let pitch = parser::parse_pitch(text)?;
        Ok(Self::from_tone_with(pitch.tone, pitch.octave, duration, volume)?)
    }

    fn on_grid(midi_number: i32, element: ScoreElement) -> Result<Self, RangeError> {
        let frequency = frequency::frequency_from_midi_number(midi_number)?;
        let midi_number = midi_number as u8;
        Ok(Self {
            frequency,
            midi_number,
            tone: Tone::from_midi_number(midi_number as i32)?,
            octave: octave_of(midi_number),
            element,
        })
    }

    pub fn name(&self) -> LetterName {
        self.tone.letter()
    }

    pub fn accidental(&self) -> Accidental {
        self.tone.accidental()
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn midi_number(&self) -> u8 {
        self.midi_number
    }

    /// Piano key nearest to this note, if it lies on the 88-key keyboard.
    pub fn piano_key(&self) -> Option<u8> {
        frequency::piano_key_from_frequency(self.frequency).ok()
    }

    /// Cents between the MIDI grid point and the stored frequency.
    ///
    /// Zero for notes built from a MIDI number, tone or notation; within ±50
    /// for notes built from an arbitrary frequency.
    pub fn cents_off_grid(&self) -> f64 {
        let grid = frequency::grid_frequency(self.midi_number);
        frequency::cents_between(grid, self.frequency)
    }

    pub fn semitone_up(&mut self) -> Result<(), RangeError> {
        self.transpose(1)
    }

    pub fn semitone_down(&mut self) -> Result<(), RangeError> {
        self.transpose(-1)
    }

    /// Moves the note by `semitones`, respelling it from the new MIDI number.
    ///
    /// Nothing changes when the result would leave 0-127.
    pub fn transpose(&mut self, semitones: i32) -> Result<(), RangeError> {
        if semitones == 0 {
            return Ok(());
        }
        validation::transpose(self.midi_number as i32, semitones)?;
        *self = Self::on_grid(self.midi_number as i32 + semitones, self.element)?;
        Ok(())
    }

    /// Swaps the tone to its other spelling, moving the octave across the
    /// C/B boundary. Pitch, MIDI number and frequency are unchanged.
    pub fn switch_accidental(&mut self) {
        let before = self.tone.spelling();
        self.tone.switch_accidental();
        self.octave += respelling_octave_shift(before, self.tone.spelling());
    }

    /// ASCII notation accepted by the parser, e.g. `C#4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.tone.notation(), self.octave)
    }

    pub fn element(&self) -> &ScoreElement {
        &self.element
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

    pub fn set_volume(&mut self, volume: i32) -> Result<(), RangeError> {
        self.element.set_volume(volume)
    }
}

fn octave_of(midi_number: u8) -> i32 {
    midi_number as i32 / 12 - 1
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation_with(s, Duration::default(), DEFAULT_VOLUME as i32)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.duration() == other.duration()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tone, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_from_midi_number() {
        let note = Note::from_midi_number(60).unwrap();
        assert_eq!(note.name(), LetterName::C);
        assert_eq!(note.accidental(), Accidental::Natural);
        assert_eq!(note.octave(), 4);
        assert!((note.frequency() - 261.626).abs() < 0.001);
        assert_eq!(note.volume(), DEFAULT_VOLUME);
        assert_eq!(note.duration(), Duration::default());

        let lowest = Note::from_midi_number(0).unwrap();
        assert_eq!(lowest.octave(), -1);
        assert!(Note::from_midi_number(128).is_err());
    }

    #[test]
    fn test_from_frequency_keeps_frequency() {
        let note = Note::from_frequency(445.0).unwrap();
        assert_eq!(note.frequency(), 445.0);
        assert_eq!(note.midi_number(), 69);
        assert_eq!(note.to_string(), "A4");
        assert!(note.cents_off_grid() > 0.0 && note.cents_off_grid() < 50.0);
        assert!(Note::from_frequency(20000.0).is_err());
    }

    #[test]
    fn test_from_tone() {
        let note = Note::from_tone(Tone::new(LetterName::A, Accidental::Natural), 4).unwrap();
        assert_eq!(note.midi_number(), 69);
        assert_eq!(note.frequency(), 440.0);
        assert_eq!(note.cents_off_grid(), 0.0);

        assert!(Note::from_tone(Tone::new(LetterName::C, Accidental::Natural), -2).is_err());
        assert!(Note::from_tone(Tone::new(LetterName::A, Accidental::Natural), 9).is_err());
        assert!(Note::from_tone(Tone::new(LetterName::C, Accidental::Natural), i32::MAX).is_err());
    }

    #[test]
    fn test_constructors_validate_volume() {
        let duration = Duration::new(NoteValue::Crotchet);
        assert!(Note::from_midi_number_with(60, duration, 128).is_err());
        assert!(Note::from_frequency_with(440.0, duration, -1).is_err());
        let note = Note::from_midi_number_with(60, duration, 10).unwrap();
        assert_eq!(note.volume(), 10);
        assert_eq!(note.value(), NoteValue::Crotchet);
    }

    #[test]
    fn test_from_str() {
        let note: Note = "C#4".parse().unwrap();
        assert_eq!(note.midi_number(), 61);
        assert_eq!(note.notation(), "C#4");
        assert_eq!(note.to_string(), "C\u{266f}4");

        let err = "H4".parse::<Note>().unwrap_err();
        assert_eq!(err, Error::Format(FormatError::InvalidNote("H4".to_string())));

        let err = "C10".parse::<Note>().unwrap_err();
        assert!(matches!(err, Error::Range(RangeError::MidiNumber { value: 132, .. })));
    }

    #[test]
    fn test_transpose() {
        let mut note = Note::from_midi_number(60).unwrap();
        note.transpose(3).unwrap();
        assert_eq!(note.midi_number(), 63);
        assert_eq!(note.notation(), "D#4");

        note.semitone_down().unwrap();
        assert_eq!(note.notation(), "D4");

        note.transpose(-14).unwrap();
        assert_eq!(note.notation(), "C3");
        assert_eq!(note.octave(), 3);
    }

    #[test]
    fn test_transpose_is_atomic() {
        let mut note = Note::from_midi_number(120).unwrap();
        let before = note;
        assert_eq!(
            note.transpose(8),
            Err(RangeError::Transpose {
                midi_number: 120,
                semitones: 8
            })
        );
        assert_eq!(note.midi_number(), before.midi_number());
        assert_eq!(note.frequency(), before.frequency());
        assert_eq!(note.octave(), before.octave());
    }

    #[test]
    fn test_transpose_keeps_element() {
        let duration = Duration::with_dots(NoteValue::Quaver, 2).unwrap();
        let mut note = Note::from_midi_number_with(60, duration, 33).unwrap();
        note.semitone_up().unwrap();
        assert_eq!(note.duration(), duration);
        assert_eq!(note.volume(), 33);
    }

    #[test]
    fn test_switch_accidental_octave() {
        let mut note: Note = "C4".parse().unwrap();
        note.switch_accidental();
        assert_eq!(note.name(), LetterName::B);
        assert_eq!(note.accidental(), Accidental::Sharp);
        assert_eq!(note.octave(), 3);
        assert_eq!(note.midi_number(), 60);

        note.switch_accidental();
        assert_eq!(note.name(), LetterName::C);
        assert_eq!(note.accidental(), Accidental::Natural);
        assert_eq!(note.octave(), 4);
    }

    #[test]
    fn test_switch_accidental_elsewhere_keeps_octave() {
        let mut note: Note = "F#2".parse().unwrap();
        note.switch_accidental();
        assert_eq!(note.notation(), "Gb2");

        let mut note: Note = "Cb4".parse().unwrap();
        note.switch_accidental();
        assert_eq!(note.notation(), "B4");
    }

    #[test]
    fn test_equality_by_frequency_and_duration() {
        let a: Note = "C#4".parse().unwrap();
        let b: Note = "Db4".parse().unwrap();
        assert_eq!(a, b);

        let mut c = b;
        c.set_value(NoteValue::Breve);
        assert_ne!(a, c);

        let mut d = a;
        d.set_volume(1).unwrap();
        assert_eq!(a, d);
    }

    #[test]
    fn test_piano_key() {
        assert_eq!(Note::from_midi_number(69).unwrap().piano_key(), Some(49));
        assert_eq!(Note::from_midi_number(21).unwrap().piano_key(), Some(1));
        assert_eq!(Note::from_midi_number(20).unwrap().piano_key(), None);
    }

    #[test]
    fn test_respelling_octave_shift() {
        let spell = |letter, accidental| Spelling { letter, accidental };
        assert_eq!(
            respelling_octave_shift(
                spell(LetterName::C, Accidental::Natural),
                spell(LetterName::B, Accidental::Sharp)
            ),
            -1
        );
        assert_eq!(
            respelling_octave_shift(
                spell(LetterName::B, Accidental::Sharp),
                spell(LetterName::C, Accidental::Natural)
            ),
            1
        );
        assert_eq!(
            respelling_octave_shift(
                spell(LetterName::C, Accidental::Flat),
                spell(LetterName::B, Accidental::Natural)
            ),
            0
        );
    }
}
