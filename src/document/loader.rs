//! Reading and writing plan documents.
//!
//! Plans are read from a file or from stdin (`-`) and written back as JSON,
//! either compact or pretty-printed. Files are written to a temporary sibling
//! first and renamed into place.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DocumentError, Result, SanitizeError};

use super::plan::Plan;

/// Path value that selects stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// Loader for plan-export documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentLoader {
    /// Whether output is pretty-printed.
    pretty: bool,
}

impl DocumentLoader {
    /// Creates a loader that writes compact JSON.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether output is pretty-printed.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Loads a plan from a path, or from stdin when the path is `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Plan> {
        let path = path.as_ref();

        if path == Path::new(STDIO_PATH) {
            debug!("Reading plan from stdin");
            return self.load_reader(std::io::stdin().lock(), STDIO_PATH);
        }

        info!("Loading plan from: {}", path.display());
        let file = std::fs::File::open(path).map_err(|e| {
            SanitizeError::Document(DocumentError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        self.load_reader(std::io::BufReader::new(file), &path.display().to_string())
    }

    /// Loads a plan from any reader. `source` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the content is not a plan.
    pub fn load_reader(&self, mut reader: impl Read, source: &str) -> Result<Plan> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            SanitizeError::Document(DocumentError::ReadFailed {
                path: source.to_string(),
                message: e.to_string(),
            })
        })?;

        Self::parse_str(&content, Some(source))
    }

    /// Parses a plan from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not match the plan schema.
    pub fn parse_str(content: &str, source: Option<&str>) -> Result<Plan> {
        let plan: Plan = serde_json::from_str(content).map_err(|e| {
            SanitizeError::Document(DocumentError::parse(
                format!("JSON parse error: {e}"),
                source.map(ToString::to_string),
            ))
        })?;

        debug!(
            "Parsed plan with {} resource changes and {} output changes",
            plan.resource_changes.len(),
            plan.output_changes.len()
        );
        Ok(plan)
    }

    /// Encodes a plan as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be serialized.
    pub fn to_json(&self, plan: &Plan) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(plan)
        } else {
            serde_json::to_string(plan)
        };

        encoded.map_err(|e| {
            SanitizeError::Document(DocumentError::serialization(format!(
                "Failed to serialize plan: {e}"
            )))
        })
    }

    /// Writes an encoded plan to a path, or to stdout when the path is `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        let path = path.as_ref();

        if path == Path::new(STDIO_PATH) {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
            return Ok(());
        }

        info!("Writing sanitized plan to: {}", path.display());

        // Write to a temporary file first, then rename for atomicity
        let temp_path = temp_path_for(path);
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, path)?;

        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
