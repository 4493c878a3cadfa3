//! Command-line interface for lifeline.

mod commands;
mod render;

pub use commands::{is_verbose, run};
