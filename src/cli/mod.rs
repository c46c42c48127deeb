//! CLI module for the plan sanitizer.
//!
//! This module provides the command-line interface around the redaction
//! engine.

mod commands;
mod output;

pub use commands::{Cli, Commands, LogFormat, OutputFormat};
pub use output::OutputFormatter;
