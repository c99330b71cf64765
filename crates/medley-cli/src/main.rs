//! Medley CLI - Command-line interface for music-theory lookups
//!
//! This binary parses note notation and converts between frequencies, MIDI
//! numbers, piano keys and durations.

use clap::Parser;
use std::process::ExitCode;

use medley_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Note {
            notation,
            value,
            dots,
            volume,
            json,
        } => commands::note::run(&notation, value, dots, volume, json),
        Commands::Transpose {
            notation,
            semitones,
            json,
        } => commands::note::run_transpose(&notation, semitones, json),
        Commands::Spell { notation, json } => commands::note::run_spell(&notation, json),
        Commands::Freq { hz, json } => commands::pitch::run_freq(hz, json),
        Commands::Midi { number, json } => commands::pitch::run_midi(number, json),
        Commands::Key { key, json } => commands::pitch::run_key(key, json),
        Commands::Interval {
            reference,
            hz,
            json,
        } => commands::pitch::run_interval(reference, hz, json),
        Commands::Semitone {
            distance,
            pitch,
            json,
        } => commands::pitch::run_semitone(distance, pitch, json),
        Commands::Duration { value, dots, json } => commands::duration::run(value, dots, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
