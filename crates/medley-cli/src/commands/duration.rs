//! Duration command implementation

use anyhow::{Context, Result};
use medley_theory::{Duration, NoteValue};
use serde::Serialize;
use std::process::ExitCode;

use super::reporting;

#[derive(Debug, Serialize)]
struct DurationReport {
    display: String,
    #[serde(flatten)]
    duration: Duration,
    duration_value: f64,
}

/// Describe a note value with `dots` dots.
pub fn run(value: NoteValue, dots: i32, json: bool) -> Result<ExitCode> {
    let duration = Duration::with_dots(value, dots).context("Invalid duration")?;
    let report = DurationReport {
        display: duration.to_string(),
        duration,
        duration_value: duration.duration_value(),
    };

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_heading("Duration:", &report.display);
        reporting::print_field("Whole notes", report.duration_value);
    }
    Ok(ExitCode::SUCCESS)
}
