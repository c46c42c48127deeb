//! Configuration types of the plan-export document.
//!
//! The configuration tree mirrors the module graph: a module declares
//! variables, resources and outputs, and calls child modules whose own
//! configuration is embedded in the call.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The configuration section of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Provider configurations keyed by provider config key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provider_config: BTreeMap<String, ProviderConfig>,
    /// The root module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_module: Option<ConfigModule>,
}

/// A provider configuration block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name.
    #[serde(default)]
    pub name: String,
    /// Arguments of the provider block.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub expressions: BTreeMap<String, Expression>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A configuration module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigModule {
    /// Outputs declared by the module.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, ConfigOutput>,
    /// Resources declared by the module.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ConfigResource>,
    /// Child module calls.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub module_calls: BTreeMap<String, ModuleCall>,
    /// Variables declared by the module. `None` when the table is absent
    /// from the document, which is distinct from an empty table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<BTreeMap<String, ConfigVariable>>,
}

/// A resource declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigResource {
    /// Resource address relative to its module.
    #[serde(default)]
    pub address: String,
    /// Resource arguments.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub expressions: BTreeMap<String, Expression>,
    /// Provisioner blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provisioners: Vec<ConfigProvisioner>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A provisioner block of a configured resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigProvisioner {
    /// Provisioner type (`local-exec`, `remote-exec`, ...).
    #[serde(rename = "type", default)]
    pub provisioner_type: String,
    /// Provisioner arguments.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub expressions: BTreeMap<String, Expression>,
}

/// An output declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOutput {
    /// Whether the output is sensitive.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    /// The output expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A variable declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigVariable {
    /// Default value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Whether the variable is sensitive.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A call to a child module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleCall {
    /// Module source.
    #[serde(default)]
    pub source: String,
    /// Arguments passed to the child module's variables.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub expressions: BTreeMap<String, Expression>,
    /// Configuration of the called module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ConfigModule>,
    /// Fields not interpreted by the sanitizer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A configuration expression.
///
/// On the wire an expression is either an object carrying `constant_value`
/// and `references`, or an array of nested blocks. A missing
/// `constant_value` means the value is not statically known and is
/// represented as `None`; an explicit `null` is a known constant.
/// An expression decoded from an array always encodes back to an array,
/// even an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExpressionRepr", into = "ExpressionRepr")]
pub struct Expression {
    /// Constant value, `None` when not statically known.
    pub constant_value: Option<Value>,
    /// References to other objects.
    pub references: Vec<String>,
    /// Nested configuration blocks, `Some` when the expression is an array.
    pub nested_blocks: Option<Vec<BTreeMap<String, Expression>>>,
}

impl Expression {
    /// Creates an expression with a known constant value.
    #[must_use]
    pub fn constant(value: Value) -> Self {
        Self {
            constant_value: Some(value),
            ..Self::default()
        }
    }

    /// Creates an expression whose value is not statically known.
    #[must_use]
    pub fn references(references: Vec<String>) -> Self {
        Self {
            references,
            ..Self::default()
        }
    }

    /// Creates an expression made of nested blocks.
    #[must_use]
    pub fn blocks(nested_blocks: Vec<BTreeMap<String, Self>>) -> Self {
        Self {
            nested_blocks: Some(nested_blocks),
            ..Self::default()
        }
    }

    /// Returns true if the value is not statically known.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.constant_value.is_none()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ExpressionRepr {
    NestedBlocks(Vec<BTreeMap<String, Expression>>),
    Data(ExpressionData),
}

#[derive(Serialize, Deserialize)]
struct ExpressionData {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    constant_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    references: Vec<String>,
}

/// Maps a present key to `Some`, including an explicit `null`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl From<ExpressionRepr> for Expression {
    fn from(repr: ExpressionRepr) -> Self {
        match repr {
            ExpressionRepr::NestedBlocks(nested_blocks) => Self::blocks(nested_blocks),
            ExpressionRepr::Data(data) => Self {
                constant_value: data.constant_value,
                references: data.references,
                nested_blocks: None,
            },
        }
    }
}

impl From<Expression> for ExpressionRepr {
    fn from(expression: Expression) -> Self {
        match expression.nested_blocks {
            Some(nested_blocks) => Self::NestedBlocks(nested_blocks),
            None => Self::Data(ExpressionData {
                constant_value: expression.constant_value,
                references: expression.references,
            }),
        }
    }
}
