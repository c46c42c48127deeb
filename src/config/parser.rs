//! Configuration parser for loading sanitizer settings.
//!
//! Settings come from a YAML file, environment variables and a `.env` file.
//! Environment variables override the file; command-line flags are applied
//! on top by the binary.

use crate::error::{ConfigError, Result, SanitizeError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::spec::SanitizerConfig;

/// Environment variable overriding the replacement value.
pub const ENV_REPLACEMENT: &str = "PLAN_SANITIZE_REPLACEMENT";

/// Environment variable overriding pretty-printing.
pub const ENV_PRETTY: &str = "PLAN_SANITIZE_PRETTY";

/// Configuration parser for loading sanitizer configuration.
#[derive(Debug, Default)]
pub struct ConfigParser {
    /// Base path for resolving the `.env` file.
    base_path: Option<PathBuf>,
}

impl ConfigParser {
    /// Creates a new configuration parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_path: None }
    }

    /// Sets the base path for resolving the `.env` file.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SanitizerConfig> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(SanitizeError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            SanitizeError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        self.parse_yaml(&content, Some(path))
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<SanitizerConfig> {
        debug!("Parsing YAML configuration");

        // An empty file is a valid, all-default configuration.
        if content.trim().is_empty() {
            return Ok(SanitizerConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            SanitizeError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, the nearest default
    /// configuration file is used if there is one, and built-in defaults
    /// otherwise. Environment overrides are applied in every case.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// if an environment override is invalid.
    pub fn resolve(
        &self,
        explicit: Option<&Path>,
        start_dir: impl AsRef<Path>,
    ) -> Result<SanitizerConfig> {
        let mut config = match explicit {
            Some(path) => self.load_file(path)?,
            None => match find_config_file(start_dir) {
                Some(path) => self.load_file(path)?,
                None => {
                    debug!("No configuration file found, using defaults");
                    SanitizerConfig::default()
                }
            },
        };

        Self::apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// `lookup` returns the value of a variable, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be interpreted.
    pub fn apply_env_overrides(
        config: &mut SanitizerConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(raw) = lookup(ENV_REPLACEMENT) {
            debug!("Overriding replacement from environment");
            config.replacement = parse_replacement(&raw);
        }

        if let Some(raw) = lookup(ENV_PRETTY) {
            debug!("Overriding output.pretty from environment");
            config.output.pretty = parse_bool(&raw).ok_or_else(|| {
                SanitizeError::Config(ConfigError::InvalidEnvValue {
                    name: ENV_PRETTY.to_string(),
                    message: format!("expected a boolean, got {raw:?}"),
                })
            })?;
        }

        Ok(())
    }

    /// Loads the .env file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the .env file exists but cannot be loaded.
    pub fn load_dotenv(&self) -> Result<()> {
        let env_path = self
            .base_path
            .as_ref()
            .map_or_else(|| PathBuf::from(".env"), |p| p.join(".env"));

        if env_path.exists() {
            info!("Loading environment from: {}", env_path.display());
            dotenvy::from_path(&env_path).map_err(|e| {
                SanitizeError::Config(ConfigError::ParseError {
                    message: format!("Failed to load .env file: {e}"),
                    location: Some(env_path.display().to_string()),
                })
            })?;
        } else {
            debug!(".env file not found at: {}", env_path.display());
        }

        Ok(())
    }
}

/// Interprets a replacement given as text.
///
/// Valid JSON is used as-is (so `0`, `null` or `{"redacted":true}` keep their
/// type); anything else is taken as a plain string.
#[must_use]
pub fn parse_replacement(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Default configuration file names to search for.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "plan-sanitize.yaml",
    "plan-sanitize.yml",
    ".plan-sanitize.yaml",
];

/// Finds the configuration file in a directory or its parent directories.
#[must_use]
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut current = start_dir.as_ref().to_path_buf();

    loop {
        for filename in DEFAULT_CONFIG_FILES {
            let config_path = current.join(filename);
            if config_path.exists() {
                info!("Found configuration file: {}", config_path.display());
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
