//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::document::STDIO_PATH;

/// plan-sanitize - Redact sensitive values from plan exports.
#[derive(Parser, Debug)]
#[command(name = "plan-sanitize")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, env = "PLAN_SANITIZE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Report format (text, json).
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Log format (text, json).
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitize a plan and write the result.
    Sanitize {
        /// Plan JSON to read (`-` for stdin).
        #[arg(default_value = STDIO_PATH)]
        input: PathBuf,

        /// Where to write the sanitized plan (`-` for stdout).
        #[arg(short = 'o', long = "out", default_value = STDIO_PATH)]
        out: PathBuf,

        /// Replacement value, as JSON or a plain string.
        #[arg(short, long, env = "PLAN_SANITIZE_REPLACEMENT")]
        replacement: Option<String>,

        /// Write compact JSON instead of pretty-printed JSON.
        #[arg(long)]
        compact: bool,

        /// Print a redaction report to stderr.
        #[arg(long)]
        report: bool,
    },

    /// Report how many values a plan would have redacted, without writing it.
    Check {
        /// Plan JSON to read (`-` for stdin).
        #[arg(default_value = STDIO_PATH)]
        input: PathBuf,
    },

    /// Write a default configuration file.
    Init {
        /// Directory to initialize (defaults to current directory).
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Force overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable log lines.
    #[default]
    Text,
    /// One JSON object per log line.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sanitize_defaults() {
        let cli = Cli::try_parse_from(["plan-sanitize", "sanitize"]).unwrap();
        match cli.command {
            Commands::Sanitize {
                input,
                out,
                compact,
                report,
                ..
            } => {
                assert_eq!(input, PathBuf::from("-"));
                assert_eq!(out, PathBuf::from("-"));
                assert!(!compact);
                assert!(!report);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sanitize_flags() {
        let cli = Cli::try_parse_from([
            "plan-sanitize",
            "--output",
            "json",
            "sanitize",
            "plan.json",
            "-o",
            "clean.json",
            "--replacement",
            "***",
            "--compact",
        ])
        .unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
        match cli.command {
            Commands::Sanitize {
                input,
                out,
                replacement,
                compact,
                ..
            } => {
                assert_eq!(input, PathBuf::from("plan.json"));
                assert_eq!(out, PathBuf::from("clean.json"));
                assert_eq!(replacement.as_deref(), Some("***"));
                assert!(compact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
