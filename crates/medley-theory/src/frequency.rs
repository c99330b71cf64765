//! Frequency, MIDI number and piano key conversions.
//!
//! All conversions use twelve-tone equal temperament relative to a reference pitch
//! (A4). MIDI note 69 and piano key 49 both sit at the reference.
//!
//! # Examples
//! ```
//! use medley_theory::frequency::{frequency_from_midi_number, midi_number_from_frequency};
//!
//! let a4 = frequency_from_midi_number(69).unwrap();
//! assert!((a4 - 440.0).abs() < 1e-9);
//! assert_eq!(midi_number_from_frequency(261.626).unwrap(), 60);
//! ```

use crate::error::RangeError;
use crate::validation;

/// Lowest frequency with a MIDI number (C-1).
pub const MIDI_MIN_FREQUENCY: f64 = 8.176;
/// Highest frequency with a MIDI number (G9).
pub const MIDI_MAX_FREQUENCY: f64 = 12543.854;

/// Lowest piano frequency (A0).
pub const PIANO_MIN_FREQUENCY: f64 = 27.5;
/// Highest piano frequency (C8).
pub const PIANO_MAX_FREQUENCY: f64 = 4186.01;

/// Baroque/"Verdi" tuning.
pub const A432: f64 = 432.0;
/// French diapason normal.
pub const A435: f64 = 435.0;
/// Concert pitch (ISO 16).
pub const A440: f64 = 440.0;
/// Common orchestral tuning.
pub const A442: f64 = 442.0;
/// Common orchestral tuning.
pub const A443: f64 = 443.0;
/// Bright orchestral tuning.
pub const A444: f64 = 444.0;

/// MIDI number of the reference pitch.
const REFERENCE_MIDI_NUMBER: f64 = 69.0;
/// Piano key of the reference pitch.
const REFERENCE_PIANO_KEY: f64 = 49.0;

/// Frequency `distance` semitones away from A440.
pub fn frequency_from_semitone_distance(distance: i32) -> f64 {
    frequency_from_semitone_distance_at(distance, A440)
}

/// Frequency `distance` semitones away from `pitch`.
pub fn frequency_from_semitone_distance_at(distance: i32, pitch: f64) -> f64 {
    2.0_f64.powf(distance as f64 / 12.0) * pitch
}

/// Distance in cents from `reference` to `frequency`.
///
/// Positive when `frequency` is above `reference`.
pub fn cents_between(reference: f64, frequency: f64) -> f64 {
    1200.0 * (frequency / reference).log2()
}

/// Whole semitones contained in `cents`.
///
/// The cents are rounded first and the division by 100 then truncates toward
/// zero: 250 cents is 2 semitones, -250 cents is -2.
pub fn semitones_from_cents(cents: f64) -> i32 {
    (cents.round() / 100.0) as i32
}

/// Whole semitones from `reference` to `frequency`.
pub fn semitones_between(reference: f64, frequency: f64) -> i32 {
    semitones_from_cents(cents_between(reference, frequency))
}

/// Nearest MIDI note number for `frequency`.
///
/// Fails unless `8.176 <= frequency <= 12543.854`. The exact frequency of MIDI
/// note 0 (8.17580 Hz) sits under the rounded lower bound and is also accepted.
pub fn midi_number_from_frequency(frequency: f64) -> Result<u8, RangeError> {
    if !(grid_frequency(0)..MIDI_MIN_FREQUENCY).contains(&frequency) {
        validation::frequency(frequency, MIDI_MIN_FREQUENCY, MIDI_MAX_FREQUENCY)?;
    }
    let note = REFERENCE_MIDI_NUMBER + 12.0 * (frequency / A440).log2();
    Ok(note.round().clamp(0.0, 127.0) as u8)
}

/// Frequency of MIDI note `midi_number`.
///
/// Uses the standard formula `f = 440 * 2^((n - 69) / 12)`. Fails unless
/// `0 <= midi_number <= 127`.
pub fn frequency_from_midi_number(midi_number: i32) -> Result<f64, RangeError> {
    validation::midi_number(midi_number)?;
    Ok(grid_frequency(midi_number as u8))
}

/// Frequency of an already validated MIDI number.
pub(crate) fn grid_frequency(midi_number: u8) -> f64 {
    A440 * 2.0_f64.powf((midi_number as f64 - REFERENCE_MIDI_NUMBER) / 12.0)
}

/// Nearest piano key number for `frequency`.
///
/// Fails unless `27.5 <= frequency <= 4186.01`.
pub fn piano_key_from_frequency(frequency: f64) -> Result<u8, RangeError> {
    validation::frequency(frequency, PIANO_MIN_FREQUENCY, PIANO_MAX_FREQUENCY)?;
    let key = 12.0 * (frequency / A440).log2() + REFERENCE_PIANO_KEY;
    Ok(key.round().clamp(1.0, 88.0) as u8)
}

/// Frequency of piano key `piano_key`.
///
/// Fails unless `1 <= piano_key <= 88`.
pub fn frequency_from_piano_key(piano_key: i32) -> Result<f64, RangeError> {
    validation::piano_key(piano_key)?;
    Ok(2.0_f64.powf((piano_key as f64 - REFERENCE_PIANO_KEY) / 12.0) * A440)
}
