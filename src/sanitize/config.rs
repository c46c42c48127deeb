//! Redaction of the configuration tree.
//!
//! Configuration carries no marker trees. Instead, sensitivity comes from
//! flags on variables and outputs, and some node kinds are scrubbed
//! unconditionally:
//! - provider blocks, which routinely carry credentials
//! - provisioner arguments, which have no sensitivity model of their own
//!
//! Module call arguments take the sensitivity of the callee variable they
//! feed.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

use crate::document::{
    ConfigModule, ConfigOutput, ConfigResource, ConfigVariable, Expression, ModuleCall,
    ProviderConfig,
};

/// Replaces the constant value of an expression and of every expression in
/// its nested blocks.
///
/// Values that are not statically known are left alone. No sensitivity flag
/// is consulted; callers decide whether an expression should be redacted.
pub fn sanitize_expression(expression: &mut Expression, replace_with: &Value) -> usize {
    let mut redacted = 0;
    if let Some(constant) = expression.constant_value.as_mut() {
        *constant = replace_with.clone();
        redacted += 1;
    }

    for block in expression.nested_blocks.iter_mut().flatten() {
        redacted += sanitize_expressions(block, replace_with);
    }
    redacted
}

fn sanitize_expressions(
    expressions: &mut BTreeMap<String, Expression>,
    replace_with: &Value,
) -> usize {
    expressions
        .values_mut()
        .map(|expression| sanitize_expression(expression, replace_with))
        .sum()
}

/// Redacts every expression of every provider configuration.
pub fn sanitize_provider_configs(
    configs: &mut BTreeMap<String, ProviderConfig>,
    replace_with: &Value,
) -> usize {
    configs
        .iter_mut()
        .map(|(key, config)| {
            trace!("Sanitizing provider config {key}");
            sanitize_expressions(&mut config.expressions, replace_with)
        })
        .sum()
}

/// Replaces the default of every sensitive variable that has one.
pub fn sanitize_config_variables(
    variables: &mut BTreeMap<String, ConfigVariable>,
    replace_with: &Value,
) -> usize {
    let mut redacted = 0;
    for (name, variable) in variables.iter_mut() {
        if variable.sensitive && variable.default.is_some() {
            trace!("Redacting default of sensitive variable {name}");
            variable.default = Some(replace_with.clone());
            redacted += 1;
        }
    }
    redacted
}

/// Redacts the expression of every sensitive output.
pub fn sanitize_config_outputs(
    outputs: &mut BTreeMap<String, ConfigOutput>,
    replace_with: &Value,
) -> usize {
    outputs
        .values_mut()
        .filter(|output| output.sensitive)
        .filter_map(|output| output.expression.as_mut())
        .map(|expression| sanitize_expression(expression, replace_with))
        .sum()
}

/// Redacts every provisioner expression of every resource.
pub fn sanitize_resource_provisioners(
    resources: &mut [ConfigResource],
    replace_with: &Value,
) -> usize {
    resources
        .iter_mut()
        .flat_map(|resource| resource.provisioners.iter_mut())
        .map(|provisioner| sanitize_expressions(&mut provisioner.expressions, replace_with))
        .sum()
}

/// Redacts the arguments of a module call that feed sensitive variables of
/// the callee, then sanitizes the callee module itself.
///
/// When the callee's variable table is absent every argument is redacted.
pub fn sanitize_module_call(name: &str, call: &mut ModuleCall, replace_with: &Value) -> usize {
    let mut redacted = 0;

    match call.module.as_ref().and_then(|module| module.variables.as_ref()) {
        Some(variables) => {
            for (argument, expression) in &mut call.expressions {
                let sensitive = variables.get(argument).is_some_and(|v| v.sensitive);
                if sensitive {
                    trace!("Redacting argument {argument} of module call {name}");
                    redacted += sanitize_expression(expression, replace_with);
                }
            }
        }
        None => {
            // Unresolved callee: sensitivity of the arguments is unknown.
            warn!("Module call {name} has no variable table, redacting all arguments");
            redacted += sanitize_expressions(&mut call.expressions, replace_with);
        }
    }

    if let Some(module) = call.module.as_mut() {
        redacted += sanitize_module_config(module, replace_with);
    }
    redacted
}

/// Sanitizes a configuration module and, recursively, every module it calls.
pub fn sanitize_module_config(module: &mut ConfigModule, replace_with: &Value) -> usize {
    debug!(
        "Sanitizing config module ({} resources, {} module calls)",
        module.resources.len(),
        module.module_calls.len()
    );

    let mut redacted = 0;
    if let Some(variables) = module.variables.as_mut() {
        redacted += sanitize_config_variables(variables, replace_with);
    }
    redacted += sanitize_resource_provisioners(&mut module.resources, replace_with);
    redacted += sanitize_config_outputs(&mut module.outputs, replace_with);

    for (name, call) in &mut module.module_calls {
        redacted += sanitize_module_call(name, call, replace_with);
    }
    redacted
}
