//! Range guards for every bounded quantity in the crate.
//!
//! Each guard returns `Ok(())` when its argument is inside the documented window
//! and a [`RangeError`] naming the window otherwise. Constructors and mutators call
//! these before touching any state.

use crate::error::RangeError;

/// Lowest valid MIDI note number.
pub const MIDI_MIN_NUMBER: i32 = 0;
/// Highest valid MIDI note number.
pub const MIDI_MAX_NUMBER: i32 = 127;

/// Lowest piano key (A0).
pub const PIANO_MIN_KEY: i32 = 1;
/// Highest piano key (C8).
pub const PIANO_MAX_KEY: i32 = 88;

/// Lowest volume.
pub const VOLUME_MIN_VALUE: i32 = 0;
/// Highest volume.
pub const VOLUME_MAX_VALUE: i32 = 127;

/// Fewest dots a duration may carry.
pub const DOTS_MIN: i32 = 0;
/// Most dots a duration may carry.
pub const DOTS_MAX: i32 = 3;

/// Checks that `frequency` lies in `[min, max]`.
///
/// Both bounds are inclusive. Non-finite values are always rejected.
pub fn frequency(frequency: f64, min: f64, max: f64) -> Result<(), RangeError> {
    if !frequency.is_finite() || frequency < min || frequency > max {
        return Err(RangeError::Frequency {
            value: frequency,
            min,
            max,
        });
    }
    Ok(())
}

/// Checks that `midi_number` lies in `[0, 127]`.
pub fn midi_number(midi_number: i32) -> Result<(), RangeError> {
    if !(MIDI_MIN_NUMBER..=MIDI_MAX_NUMBER).contains(&midi_number) {
        return Err(RangeError::MidiNumber {
            value: midi_number,
            min: MIDI_MIN_NUMBER,
            max: MIDI_MAX_NUMBER,
        });
    }
    Ok(())
}

/// Checks that `piano_key` lies in `[1, 88]`.
pub fn piano_key(piano_key: i32) -> Result<(), RangeError> {
    if !(PIANO_MIN_KEY..=PIANO_MAX_KEY).contains(&piano_key) {
        return Err(RangeError::PianoKey {
            value: piano_key,
            min: PIANO_MIN_KEY,
            max: PIANO_MAX_KEY,
        });
    }
    Ok(())
}

/// Checks that shifting `midi_number` by `semitones` stays inside `[0, 127]`.
pub fn transpose(midi_number: i32, semitones: i32) -> Result<(), RangeError> {
    let transposed = midi_number.saturating_add(semitones);
    if !(MIDI_MIN_NUMBER..=MIDI_MAX_NUMBER).contains(&transposed) {
        return Err(RangeError::Transpose {
            midi_number,
            semitones,
        });
    }
    Ok(())
}

/// Checks that `volume` lies in `[0, 127]`.
pub fn volume(volume: i32) -> Result<(), RangeError> {
    if !(VOLUME_MIN_VALUE..=VOLUME_MAX_VALUE).contains(&volume) {
        return Err(RangeError::Volume {
            value: volume,
            min: VOLUME_MIN_VALUE,
            max: VOLUME_MAX_VALUE,
        });
    }
    Ok(())
}

/// Checks that `dots` lies in `[0, 3]`.
pub fn dots(dots: i32) -> Result<(), RangeError> {
    if !(DOTS_MIN..=DOTS_MAX).contains(&dots) {
        return Err(RangeError::Dots {
            value: dots,
            min: DOTS_MIN,
            max: DOTS_MAX,
        });
    }
    Ok(())
}

/// Checks that `semitones` lies in `[min, max]`.
pub fn semitones(semitones: i32, min: i32, max: i32) -> Result<(), RangeError> {
    if semitones < min || semitones > max {
        return Err(RangeError::Semitones {
            value: semitones,
            min,
            max,
        });
    }
    Ok(())
}
