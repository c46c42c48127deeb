//! Redaction of plan variables.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::trace;

use crate::document::{ConfigVariable, PlanVariable};

/// Replaces the value of every plan variable whose declaration is sensitive.
///
/// `configs` should be the variable table of the root configuration module.
/// Variables without a declaration are left untouched.
pub fn sanitize_plan_variables(
    variables: &mut BTreeMap<String, PlanVariable>,
    configs: Option<&BTreeMap<String, ConfigVariable>>,
    replace_with: &Value,
) -> usize {
    let Some(configs) = configs else {
        return 0;
    };

    let mut redacted = 0;
    for (name, variable) in variables.iter_mut() {
        if configs.get(name).is_some_and(|config| config.sensitive) {
            trace!("Redacting sensitive plan variable {name}");
            variable.value = replace_with.clone();
            redacted += 1;
        }
    }
    redacted
}
