//! Note commands
//!
//! Parse notation text into a note, transpose it, or respell it.

use anyhow::{Context, Result};
use colored::Colorize;
use medley_theory::{Duration, Note, NoteValue};
use serde::Serialize;
use std::process::ExitCode;

use super::reporting::{self, NoteReport};

/// Parse `text` with the given duration and volume, then describe the note.
pub fn run(text: &str, value: NoteValue, dots: i32, volume: i32, json: bool) -> Result<ExitCode> {
    let duration = Duration::with_dots(value, dots).context("Invalid duration")?;
    let note = Note::from_notation_with(text, duration, volume)
        .with_context(|| format!("Failed to build note from '{}'", text))?;
    let report = NoteReport::from_note(&note);

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading("Note:", text);
        reporting::print_note(&report);
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Serialize)]
struct TransposeReport {
    semitones: i32,
    from: NoteReport,
    to: NoteReport,
}

/// Move the note written as `text` by `semitones`.
pub fn run_transpose(text: &str, semitones: i32, json: bool) -> Result<ExitCode> {
    let original: Note = text
        .parse()
        .with_context(|| format!("Failed to parse note '{}'", text))?;
    let mut transposed = original;
    transposed
        .transpose(semitones)
        .with_context(|| format!("Cannot transpose {} by {} semitones", original, semitones))?;

    let report = TransposeReport {
        semitones,
        from: NoteReport::from_note(&original),
        to: NoteReport::from_note(&transposed),
    };

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading("Transpose:", &format!("{} by {:+}", text, semitones));
        println!(
            "  {} {} {} {}",
            report.from.display,
            "->".green(),
            report.to.display,
            format!("(MIDI {} -> {})", report.from.midi_number, report.to.midi_number).dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Serialize)]
struct SpellReport {
    original: NoteReport,
    respelled: NoteReport,
}

impl SpellReport {
    fn single_spelling(&self) -> bool {
        self.original.notation == self.respelled.notation
    }
}

fn spell_report(text: &str) -> Result<SpellReport> {
    let original: Note = text
        .parse()
        .with_context(|| format!("Failed to parse note '{}'", text))?;
    let mut respelled = original;
    respelled.switch_accidental();

    Ok(SpellReport {
        original: NoteReport::from_note(&original),
        respelled: NoteReport::from_note(&respelled),
    })
}

/// Show the other spelling of the note written as `text`.
pub fn run_spell(text: &str, json: bool) -> Result<ExitCode> {
    let report = spell_report(text)?;

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading("Spell:", text);
        if report.single_spelling() {
            println!(
                "  {} {} has a single spelling",
                "ok".green(),
                report.original.display
            );
        } else {
            println!(
                "  {} {} {}",
                report.original.display,
                "=".green(),
                report.respelled.display
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_builds_note_with_options() {
        assert!(run("Bb3", NoteValue::Crotchet, 1, 64, true).is_ok());
        assert!(run("C4", NoteValue::Minim, 4, 98, true).is_err());
        assert!(run("C4", NoteValue::Minim, 0, 128, true).is_err());
        assert!(run("H4", NoteValue::Minim, 0, 98, true).is_err());
    }

    #[test]
    fn test_run_transpose_reports_window() {
        assert!(run_transpose("C4", -13, true).is_ok());

        let err = run_transpose("G9", 1, true).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Cannot transpose G9 by 1 semitones"));
        assert!(message.contains("between -127 and +0"));
    }

    #[test]
    fn test_spell_natural_has_single_spelling() {
        let report = spell_report("D4").unwrap();
        assert!(report.single_spelling());
        assert_eq!(report.respelled.notation, "D4");
        assert!(run_spell("D4", false).is_ok());
    }

    #[test]
    fn test_spell_moves_octave_across_b_and_c() {
        let report = spell_report("C4").unwrap();
        assert!(!report.single_spelling());
        assert_eq!(report.respelled.notation, "B#3");
        assert_eq!(report.respelled.midi_number, 60);
    }

    #[test]
    fn test_spell_rejects_bad_notation() {
        let err = spell_report("C##4").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse note 'C##4'"));
    }
}
