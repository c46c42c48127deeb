//! Configuration module for the plan sanitizer.
//!
//! This module handles all configuration-related functionality:
//! - Parsing and deserializing `plan-sanitize.yaml`
//! - Environment and `.env` overrides
//! - Validation of configuration values

mod parser;
mod spec;
mod validator;

pub use parser::{
    ConfigParser, DEFAULT_CONFIG_FILES, ENV_PRETTY, ENV_REPLACEMENT, find_config_file,
    parse_replacement,
};
pub use spec::{OutputConfig, SanitizerConfig};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};
