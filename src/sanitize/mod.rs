//! Redaction engine.
//!
//! Every function here mutates the document in place and returns the number
//! of substitutions it made. Callers that need the original document must
//! clone it first.
//!
//! - [`value`]: marker-guided redaction of JSON value trees
//! - [`change`]: before/after changes
//! - [`state`]: state snapshots, cross-referenced with resource changes
//! - [`config`]: the configuration tree and its expressions
//! - [`variables`]: plan variables
//! - [`plan`]: the whole plan

pub mod change;
pub mod config;
pub mod plan;
mod report;
pub mod state;
pub mod value;
pub mod variables;

/// Default replacement for sensitive values.
pub const DEFAULT_SENSITIVE_VALUE: &str = "REDACTED_SENSITIVE";

pub use change::sanitize_change;
pub use config::{
    sanitize_config_outputs, sanitize_config_variables, sanitize_expression, sanitize_module_call,
    sanitize_module_config, sanitize_provider_configs, sanitize_resource_provisioners,
};
pub use plan::{sanitize_plan, sanitize_plan_with_value};
pub use report::RedactionReport;
pub use state::{ChangeMode, find_resource_change, sanitize_state_module, sanitize_state_outputs};
pub use value::{AUXILIARY_SUFFIXES, sanitize_auxiliary, sanitize_value};
pub use variables::sanitize_plan_variables;
