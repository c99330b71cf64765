//! CLI command implementations

pub mod duration;
pub mod note;
pub mod pitch;

mod reporting;
