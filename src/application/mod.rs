//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RunController` - scan, select, deploy; once, continuously, or by name

pub mod run_controller;
mod settings;
mod summary;

pub use run_controller::{RunController, RunMode};
pub use settings::RunSettings;
pub use summary::RunSummary;
