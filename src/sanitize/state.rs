//! Redaction of state snapshots.
//!
//! State resources do not carry reliable sensitivity markers of their own in
//! every document, so each resource is matched against the plan's resource
//! changes by address and uses that change's markers. Only when no change
//! matches does the resource fall back to its embedded `sensitive_values`.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::document::{ResourceChange, StateModule, StateOutput, StateResource};
use crate::error::SanitizeError;

use super::value::sanitize_value;

/// Which side of a matching change supplies the markers for a state tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMode {
    /// Use `before_sensitive`, for the prior state.
    Before,
    /// Use `after_sensitive`, for the planned values.
    After,
}

impl ChangeMode {
    /// Returns the name of the change field this mode reads.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Before => "before_sensitive",
            Self::After => "after_sensitive",
        }
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl FromStr for ChangeMode {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" | "before_sensitive" => Ok(Self::Before),
            "after" | "after_sensitive" => Ok(Self::After),
            other => Err(SanitizeError::InvalidChangeMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Redacts every resource in `module` and its child modules, in place.
///
/// Returns the number of substitutions made.
pub fn sanitize_state_module(
    module: &mut StateModule,
    resource_changes: &[ResourceChange],
    mode: ChangeMode,
    replace_with: &Value,
) -> usize {
    debug!(
        "Sanitizing state module {:?} ({} resources, {} child modules) using {mode}",
        module.address,
        module.resources.len(),
        module.child_modules.len()
    );

    let mut redacted = 0;
    for resource in &mut module.resources {
        let change = find_resource_change(resource_changes, &resource.address);
        redacted += sanitize_state_resource(resource, change, mode, replace_with);
    }

    for child in &mut module.child_modules {
        redacted += sanitize_state_module(child, resource_changes, mode, replace_with);
    }

    redacted
}

fn sanitize_state_resource(
    resource: &mut StateResource,
    change: Option<&ResourceChange>,
    mode: ChangeMode,
    replace_with: &Value,
) -> usize {
    let sensitive = match change.and_then(|rc| rc.change.as_ref()) {
        Some(change) => match mode {
            ChangeMode::Before => &change.before_sensitive,
            ChangeMode::After => &change.after_sensitive,
        },
        None => {
            trace!(
                "No change found for {}, using embedded sensitive values",
                resource.address
            );
            &resource.sensitive_values
        }
    };

    sanitize_value(&mut resource.values, sensitive, replace_with)
}

/// Finds the first resource change with the given address.
///
/// An empty address never matches.
#[must_use]
pub fn find_resource_change<'a>(
    resource_changes: &'a [ResourceChange],
    address: &str,
) -> Option<&'a ResourceChange> {
    if address.is_empty() {
        return None;
    }
    resource_changes.iter().find(|rc| rc.address == address)
}

/// Replaces the value of every output marked sensitive.
///
/// Returns the number of substitutions made.
pub fn sanitize_state_outputs(
    outputs: &mut BTreeMap<String, StateOutput>,
    replace_with: &Value,
) -> usize {
    let mut redacted = 0;
    for (name, output) in outputs.iter_mut() {
        if output.sensitive {
            trace!("Redacting sensitive output {name}");
            output.value = replace_with.clone();
            redacted += 1;
        }
    }
    redacted
}
