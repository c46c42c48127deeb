//! Redaction reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of substitutions made in each section of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionReport {
    /// When the plan was sanitized.
    pub sanitized_at: DateTime<Utc>,
    /// Substitutions in resource changes.
    pub resource_changes: usize,
    /// Substitutions in resource drift entries.
    pub resource_drift: usize,
    /// Substitutions in planned values, outputs included.
    pub planned_values: usize,
    /// Substitutions in the prior state, outputs included.
    pub prior_state: usize,
    /// Substitutions in output changes.
    pub output_changes: usize,
    /// Substitutions in provider configurations.
    pub provider_configs: usize,
    /// Substitutions in the module configuration tree.
    pub configuration: usize,
    /// Substitutions in plan variables.
    pub variables: usize,
    /// SHA-256 digest of the emitted document, when one was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl RedactionReport {
    /// Creates an empty report stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sanitized_at: Utc::now(),
            resource_changes: 0,
            resource_drift: 0,
            planned_values: 0,
            prior_state: 0,
            output_changes: 0,
            provider_configs: 0,
            configuration: 0,
            variables: 0,
            digest: None,
        }
    }

    /// Attaches the digest of the emitted document.
    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    /// Returns the total number of substitutions.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.resource_changes
            + self.resource_drift
            + self.planned_values
            + self.prior_state
            + self.output_changes
            + self.provider_configs
            + self.configuration
            + self.variables
    }

    /// Returns true if nothing was redacted.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Returns `(section, count)` pairs in plan order.
    #[must_use]
    pub const fn sections(&self) -> [(&'static str, usize); 8] {
        [
            ("resource_changes", self.resource_changes),
            ("resource_drift", self.resource_drift),
            ("planned_values", self.planned_values),
            ("prior_state", self.prior_state),
            ("output_changes", self.output_changes),
            ("provider_configs", self.provider_configs),
            ("configuration", self.configuration),
            ("variables", self.variables),
        ]
    }
}

impl Default for RedactionReport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RedactionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_clean() {
            return write!(f, "No sensitive values found");
        }

        writeln!(f, "Redacted {} values:", self.total())?;
        for (section, count) in self.sections() {
            if count > 0 {
                writeln!(f, "  {section}: {count}")?;
            }
        }
        Ok(())
    }
}
