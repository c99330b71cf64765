//! CLI argument definitions for the Medley command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use medley_theory::frequency::A440;
use medley_theory::NoteValue;

/// Medley - note, pitch and duration lookups
#[derive(Parser)]
#[command(name = "medley")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse note notation (e.g. C#4, Bb, A-1) and describe the note
    Note {
        /// Note notation: letter, optional b/#, optional octave
        notation: String,

        /// Note value (breve, semibreve, minim, crotchet, quaver, ...)
        #[arg(long, default_value = "minim")]
        value: NoteValue,

        /// Number of dots (0-3)
        #[arg(long, default_value_t = 0)]
        dots: i32,

        /// Volume (0-127)
        #[arg(long, default_value_t = 98)]
        volume: i32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Transpose a note by a number of semitones
    Transpose {
        /// Note notation
        notation: String,

        /// Semitones to move (negative moves down)
        #[arg(allow_negative_numbers = true)]
        semitones: i32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the enharmonic respelling of a note
    Spell {
        /// Note notation
        notation: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe the note nearest to a frequency in Hz
    Freq {
        /// Frequency in Hz (8.176 - 12543.854)
        hz: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe a MIDI note number
    Midi {
        /// MIDI note number (0-127)
        number: i32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe a piano key
    Key {
        /// Piano key number (1-88)
        key: i32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Measure the cents and semitones between two frequencies
    Interval {
        /// Reference frequency in Hz
        reference: f64,

        /// Target frequency in Hz
        hz: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Frequency a number of semitones away from a reference pitch
    Semitone {
        /// Semitone distance (negative is below the reference)
        #[arg(allow_negative_numbers = true)]
        distance: i32,

        /// Reference pitch in Hz
        #[arg(long, default_value_t = A440)]
        pitch: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe a note value with optional dots
    Duration {
        /// Note value (breve, semibreve, minim, crotchet, quaver, ...)
        value: NoteValue,

        /// Number of dots (0-3)
        #[arg(long, default_value_t = 0)]
        dots: i32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
