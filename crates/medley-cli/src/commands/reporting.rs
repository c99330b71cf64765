use anyhow::Result;
use colored::Colorize;
use medley_theory::Note;
use serde::Serialize;

/// Flat, printable description of a note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteReport {
    pub notation: String,
    pub display: String,
    pub letter: String,
    pub accidental: String,
    pub octave: i32,
    pub pitch_class: u8,
    pub midi_number: u8,
    pub frequency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piano_key: Option<u8>,
    pub cents_off_grid: f64,
    pub duration: String,
    pub duration_value: f64,
    pub volume: u8,
}

impl NoteReport {
    pub fn from_note(note: &Note) -> Self {
        Self {
            notation: note.notation(),
            display: note.to_string(),
            letter: note.name().to_string(),
            accidental: note.accidental().name().to_string(),
            octave: note.octave(),
            pitch_class: note.tone().pitch_class(),
            midi_number: note.midi_number(),
            frequency: note.frequency(),
            piano_key: note.piano_key(),
            cents_off_grid: note.cents_off_grid(),
            duration: note.duration().to_string(),
            duration_value: note.duration_value(),
            volume: note.volume(),
        }
    }
}

/// Pretty-print `value` as JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a bold heading.
pub(crate) fn print_heading(title: &str, subject: &str) {
    println!("{} {}", title.cyan().bold(), subject);
}

/// Print one aligned `label: value` line.
pub(crate) fn print_field(label: &str, value: impl std::fmt::Display) {
    let label = format!("{:<16}", format!("{}:", label));
    println!("  {}{}", label.dimmed(), value);
}

/// Print every field of a note report.
pub(crate) fn print_note(report: &NoteReport) {
    print_field("Note", &report.display);
    print_field("Notation", &report.notation);
    print_field("Name", &report.letter);
    print_field("Accidental", &report.accidental);
    print_field("Octave", report.octave);
    print_field("Pitch class", report.pitch_class);
    print_field("MIDI number", report.midi_number);
    print_field("Frequency", format!("{:.3} Hz", report.frequency));
    match report.piano_key {
        Some(key) => print_field("Piano key", key),
        None => print_field("Piano key", "off the keyboard".yellow()),
    }
    if report.cents_off_grid != 0.0 {
        print_field("Deviation", format!("{:+.2} cents", report.cents_off_grid));
    }
    print_field("Duration", &report.duration);
    print_field("Duration value", report.duration_value);
    print_field("Volume", report.volume);
}

#[cfg(test)]
mod tests {
    use super::*;
    use medley_theory::NoteValue;

    #[test]
    fn test_report_from_frequency_note() {
        let note = Note::from_frequency(430.0).unwrap();
        let report = NoteReport::from_note(&note);

        assert_eq!(report.notation, "A4");
        assert_eq!(report.midi_number, 69);
        assert_eq!(report.pitch_class, 9);
        assert_eq!(report.frequency, 430.0);
        assert_eq!(report.piano_key, Some(49));
        assert!(report.cents_off_grid < -39.0 && report.cents_off_grid > -41.0);
        assert_eq!(report.volume, 98);
    }

    #[test]
    fn test_report_off_keyboard() {
        let note = Note::from_midi_number(120).unwrap();
        let report = NoteReport::from_note(&note);

        assert_eq!(report.piano_key, None);
        assert_eq!(report.cents_off_grid, 0.0);

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("piano_key").is_none());
    }

    #[test]
    fn test_report_carries_duration() {
        let mut note: Note = "C#4".parse().unwrap();
        note.set_value(NoteValue::Quaver);
        let report = NoteReport::from_note(&note);

        assert_eq!(report.accidental, "Sharp");
        assert_eq!(report.letter, "C");
        assert_eq!(report.duration_value, 0.125);
    }
}
