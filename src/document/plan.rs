//! Plan, change and state types of the plan-export document.
//!
//! Only the fields the sanitizer reads or writes are modelled explicitly.
//! Everything else is kept in a flattened `extra` map so that a document
//! survives a decode/sanitize/encode round trip without losing data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::configuration::Config;

/// The root plan document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Version of the plan-export format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    /// Version of the tool that produced the plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    /// Root module input variables, as supplied for this plan.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, PlanVariable>,
    /// State as it would be after applying the plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_values: Option<StateValues>,
    /// Changes detected outside of the tool since the last apply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_drift: Vec<ResourceChange>,
    /// Proposed changes to resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_changes: Vec<ResourceChange>,
    /// Proposed changes to root module outputs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub output_changes: BTreeMap<String, Change>,
    /// State before the plan was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_state: Option<State>,
    /// Configuration the plan was made from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Config>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single plan variable value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanVariable {
    /// The variable's value.
    #[serde(default)]
    pub value: Value,
}

/// A before/after pair with parallel sensitivity markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Change {
    /// Actions to be taken (`create`, `update`, `delete`, ...).
    #[serde(default)]
    pub actions: Vec<String>,
    /// Value before the change.
    #[serde(default)]
    pub before: Value,
    /// Value after the change.
    #[serde(default)]
    pub after: Value,
    /// Markers for values only known after apply.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub after_unknown: Value,
    /// Sensitivity markers for `before`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub before_sensitive: Value,
    /// Sensitivity markers for `after`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub after_sensitive: Value,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A proposed change to a single resource instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceChange {
    /// Absolute resource address, empty when the export omits it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Address of the module containing the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_address: Option<String>,
    /// Resource mode (`managed` or `data`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mode: String,
    /// Resource type.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
    /// Resource name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// The change itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<Change>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Version of the state-export format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    /// Version of the tool that produced the state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    /// The state values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<StateValues>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outputs and the root module of a state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateValues {
    /// Root module outputs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, StateOutput>,
    /// The root module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_module: Option<StateModule>,
}

/// A module in a state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateModule {
    /// Module address, empty for the root module.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Resources in this module.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<StateResource>,
    /// Nested modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_modules: Vec<StateModule>,
}

/// A resource instance in a state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateResource {
    /// Absolute resource address, empty when the export omits it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Resource mode (`managed` or `data`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mode: String,
    /// Resource type.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
    /// Resource name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Attribute values.
    #[serde(default)]
    pub values: Value,
    /// Embedded sensitivity markers for `values`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub sensitive_values: Value,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A root module output in a state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateOutput {
    /// Whether the output is sensitive.
    #[serde(default)]
    pub sensitive: bool,
    /// The output value.
    #[serde(default)]
    pub value: Value,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceChange {
    /// Creates a resource change for an address.
    #[must_use]
    pub fn new(address: impl Into<String>, change: Change) -> Self {
        Self {
            address: address.into(),
            change: Some(change),
            ..Self::default()
        }
    }
}

impl StateResource {
    /// Creates a state resource for an address with the given attribute values.
    #[must_use]
    pub fn new(address: impl Into<String>, values: Value) -> Self {
        Self {
            address: address.into(),
            values,
            ..Self::default()
        }
    }
}
