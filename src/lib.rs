//! Randeploy - random Salesforce component deployer
//!
//! Scans a project's `force-app/main/default` tree for deployable artifacts,
//! picks one at random (or a named subset), and hands it to the `sf` CLI.
//! Useful for keeping a deploy pipeline or a scratch org busy with realistic
//! traffic.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{RunController, RunSummary};
pub use config::Config;
pub use domain::entities::{ArtifactDescriptor, ArtifactKind, Catalog, DeployOutcome};
pub use domain::ports::{ArtifactSource, DeployBackend, RunEvent, RunEventSink, Sleeper};
pub use domain::services::{pick_by_names, pick_random};
pub use domain::value_objects::{IntervalBounds, TestLevel};
pub use error::{RandeployError, RandeployResult};
pub use infrastructure::{DirectoryScanner, JsonEventSink, SfCliBackend, ThreadSleeper};
