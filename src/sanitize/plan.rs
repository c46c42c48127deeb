//! Whole-plan sanitization.

use serde_json::Value;
use tracing::{debug, info};

use crate::document::Plan;
use crate::error::{Result, SanitizeError};

use super::change::sanitize_change;
use super::config::{sanitize_module_config, sanitize_provider_configs};
use super::report::RedactionReport;
use super::state::{ChangeMode, sanitize_state_module, sanitize_state_outputs};
use super::variables::sanitize_plan_variables;
use super::DEFAULT_SENSITIVE_VALUE;

/// Sanitizes a plan in place, replacing sensitive values with
/// [`DEFAULT_SENSITIVE_VALUE`].
///
/// See [`sanitize_plan_with_value`] for where replacement takes place.
///
/// # Errors
///
/// Returns [`SanitizeError::MissingPlan`] if no plan is supplied.
pub fn sanitize_plan(plan: Option<&mut Plan>) -> Result<RedactionReport> {
    sanitize_plan_with_value(plan, &Value::String(DEFAULT_SENSITIVE_VALUE.to_string()))
}

/// Sanitizes a plan in place, replacing sensitive values with `replace_with`.
///
/// Sections are processed in this order:
///
/// * Resource changes and resource drift, by their `before_sensitive` and
///   `after_sensitive` markers.
/// * Planned values, by the `after_sensitive` markers of the matching
///   resource changes. Outputs by their sensitivity flag.
/// * Prior state, by the `before_sensitive` markers of the matching resource
///   changes. Outputs by their sensitivity flag.
/// * Output changes, by their markers. Sensitive outputs are marked the same
///   on both sides, so they end up fully obscured.
/// * Provider configurations, the root module and every module it calls.
/// * Plan variables, by the sensitivity declared in the root module.
///
/// Absent sections are skipped.
///
/// # Errors
///
/// Returns [`SanitizeError::MissingPlan`] if no plan is supplied.
pub fn sanitize_plan_with_value(
    plan: Option<&mut Plan>,
    replace_with: &Value,
) -> Result<RedactionReport> {
    let Some(plan) = plan else {
        return Err(SanitizeError::MissingPlan);
    };

    let mut report = RedactionReport::new();

    report.resource_changes = plan
        .resource_changes
        .iter_mut()
        .map(|rc| sanitize_change(rc.change.as_mut(), replace_with))
        .sum();

    report.resource_drift = plan
        .resource_drift
        .iter_mut()
        .map(|rc| sanitize_change(rc.change.as_mut(), replace_with))
        .sum();

    if let Some(planned) = plan.planned_values.as_mut() {
        debug!("Sanitizing planned values");
        if let Some(root) = planned.root_module.as_mut() {
            report.planned_values += sanitize_state_module(
                root,
                &plan.resource_changes,
                ChangeMode::After,
                replace_with,
            );
        }
        report.planned_values += sanitize_state_outputs(&mut planned.outputs, replace_with);
    }

    if let Some(values) = plan.prior_state.as_mut().and_then(|state| state.values.as_mut()) {
        debug!("Sanitizing prior state");
        if let Some(root) = values.root_module.as_mut() {
            report.prior_state += sanitize_state_module(
                root,
                &plan.resource_changes,
                ChangeMode::Before,
                replace_with,
            );
        }
        report.prior_state += sanitize_state_outputs(&mut values.outputs, replace_with);
    }

    report.output_changes = plan
        .output_changes
        .values_mut()
        .map(|change| sanitize_change(Some(change), replace_with))
        .sum();

    if let Some(config) = plan.configuration.as_mut() {
        report.provider_configs =
            sanitize_provider_configs(&mut config.provider_config, replace_with);

        if let Some(root) = config.root_module.as_mut() {
            report.configuration = sanitize_module_config(root, replace_with);
            report.variables =
                sanitize_plan_variables(&mut plan.variables, root.variables.as_ref(), replace_with);
        }
    }

    info!("Sanitized plan: {} values redacted", report.total());
    Ok(report)
}
