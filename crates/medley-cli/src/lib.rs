//! Medley CLI library.
//!
//! Command implementations behind the `medley` binary. Each command reads its
//! arguments, calls into `medley-theory` and prints either a colored summary
//! or a JSON report.

pub mod commands;
