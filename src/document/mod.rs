//! Plan-export document module.
//!
//! This module handles everything about the document itself:
//! - Typed structures for plans, changes, state snapshots and configuration
//! - Reading plans from files or stdin and writing them back
//! - Computing digests of sanitized output

mod configuration;
mod hash;
mod loader;
mod plan;

pub use configuration::{
    Config, ConfigModule, ConfigOutput, ConfigProvisioner, ConfigResource, ConfigVariable,
    Expression, ModuleCall, ProviderConfig,
};
pub use hash::DocumentHasher;
pub use loader::{DocumentLoader, STDIO_PATH};
pub use plan::{
    Change, Plan, PlanVariable, ResourceChange, State, StateModule, StateOutput, StateResource,
    StateValues,
};
