//! Configuration specification types for the sanitizer.
//!
//! This module defines the structs that map to the `plan-sanitize.yaml` file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sanitize::DEFAULT_SENSITIVE_VALUE;

/// The root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SanitizerConfig {
    /// Value substituted for every sensitive value. Any YAML value is
    /// accepted and converted to its JSON equivalent.
    #[serde(default = "default_replacement")]
    pub replacement: Value,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Pretty-print the sanitized plan.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Print a redaction report after sanitizing.
    #[serde(default)]
    pub report: bool,
}

fn default_replacement() -> Value {
    Value::String(DEFAULT_SENSITIVE_VALUE.to_string())
}

const fn default_pretty() -> bool {
    true
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            replacement: default_replacement(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            report: false,
        }
    }
}
