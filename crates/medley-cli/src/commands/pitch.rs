//! Pitch commands
//!
//! Conversions between frequencies, MIDI numbers, piano keys and intervals.

use anyhow::{Context, Result};
use medley_theory::frequency;
use medley_theory::Note;
use serde::Serialize;
use std::process::ExitCode;

use super::reporting::{self, NoteReport};

fn describe(title: &str, subject: &str, note: &Note, json: bool) -> Result<ExitCode> {
    let report = NoteReport::from_note(note);
    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading(title, subject);
        reporting::print_note(&report);
    }
    Ok(ExitCode::SUCCESS)
}

/// Describe the note nearest to `hz`.
pub fn run_freq(hz: f64, json: bool) -> Result<ExitCode> {
    let note = Note::from_frequency(hz).with_context(|| format!("No MIDI note for {} Hz", hz))?;
    describe("Frequency:", &format!("{} Hz", hz), &note, json)
}

/// Describe MIDI note `number`.
pub fn run_midi(number: i32, json: bool) -> Result<ExitCode> {
    let note = Note::from_midi_number(number).context("Invalid MIDI note")?;
    describe("MIDI:", &number.to_string(), &note, json)
}

/// Describe piano key `key`.
pub fn run_key(key: i32, json: bool) -> Result<ExitCode> {
    let hz = frequency::frequency_from_piano_key(key).context("Invalid piano key")?;
    let note = Note::from_frequency(hz)?;
    describe("Piano key:", &key.to_string(), &note, json)
}

#[derive(Debug, Serialize)]
struct IntervalReport {
    reference: f64,
    frequency: f64,
    cents: f64,
    semitones: i32,
}

/// Measure the distance from `reference` to `hz`.
pub fn run_interval(reference: f64, hz: f64, json: bool) -> Result<ExitCode> {
    if !(reference > 0.0 && hz > 0.0) || !reference.is_finite() || !hz.is_finite() {
        anyhow::bail!("frequencies must be positive (got {} and {})", reference, hz);
    }
    let report = IntervalReport {
        reference,
        frequency: hz,
        cents: frequency::cents_between(reference, hz),
        semitones: frequency::semitones_between(reference, hz),
    };

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading("Interval:", &format!("{} Hz -> {} Hz", reference, hz));
        reporting::print_field("Cents", format!("{:+.2}", report.cents));
        reporting::print_field("Semitones", format!("{:+}", report.semitones));
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Serialize)]
struct SemitoneReport {
    distance: i32,
    pitch: f64,
    frequency: f64,
}

/// Frequency `distance` semitones from the reference `pitch`.
pub fn run_semitone(distance: i32, pitch: f64, json: bool) -> Result<ExitCode> {
    if !(pitch > 0.0 && pitch.is_finite()) {
        anyhow::bail!("reference pitch must be positive (got {})", pitch);
    }
    let report = SemitoneReport {
        distance,
        pitch,
        frequency: frequency::frequency_from_semitone_distance_at(distance, pitch),
    };

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading(
            "Semitones:",
            &format!("{:+} from A = {} Hz", distance, pitch),
        );
        reporting::print_field("Frequency", format!("{:.3} Hz", report.frequency));
    }
    Ok(ExitCode::SUCCESS)
}
