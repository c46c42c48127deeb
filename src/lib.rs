// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Plan Sanitize
//!
//! Redacts sensitive values from machine-readable infrastructure plan exports.
//!
//! ## Overview
//!
//! A plan export carries resource changes, state snapshots, plan variables
//! and the configuration tree. Values the tool marked sensitive sit next to
//! parallel marker trees (`before_sensitive`, `after_sensitive`,
//! `sensitive_values`) or behind `sensitive` flags. This crate walks the
//! whole document and replaces every such value with a configurable
//! replacement, so the plan can be shared or stored safely.
//!
//! ## Modules
//!
//! - [`document`]: Typed plan documents, loading and digests
//! - [`sanitize`]: The redaction engine
//! - [`config`]: Configuration parsing and validation
//! - [`cli`]: Command-line interface
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use plan_sanitize::{DocumentLoader, sanitize_plan};
//!
//! let mut plan = DocumentLoader::parse_str(
//!     r#"{
//!         "format_version": "1.2",
//!         "output_changes": {
//!             "password": {
//!                 "actions": ["create"],
//!                 "before": null,
//!                 "after": "hunter2",
//!                 "after_sensitive": true
//!             }
//!         }
//!     }"#,
//!     None,
//! )?;
//!
//! let report = sanitize_plan(Some(&mut plan))?;
//! assert_eq!(report.total(), 1);
//! assert_eq!(
//!     plan.output_changes["password"].after,
//!     serde_json::json!("REDACTED_SENSITIVE")
//! );
//! # Ok::<(), plan_sanitize::SanitizeError>(())
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod sanitize;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormatter};
pub use config::{ConfigParser, ConfigValidator, SanitizerConfig};
pub use document::{DocumentHasher, DocumentLoader, Plan};
pub use error::{Result, SanitizeError};
pub use sanitize::{
    ChangeMode, DEFAULT_SENSITIVE_VALUE, RedactionReport, sanitize_plan, sanitize_plan_with_value,
};
