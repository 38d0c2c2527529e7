//! DeployBackend port - the external tool that applies a deployment

use serde::Serialize;

use crate::domain::entities::{ArtifactDescriptor, DeployOutcome};
use crate::domain::value_objects::TestLevel;

/// Per-deployment switches forwarded to the deploy tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeployOptions {
    /// `--test-level`; omitted when `None`
    pub test_level: Option<TestLevel>,
    /// `--ignore-warnings`
    pub ignore_warnings: bool,
    /// `--dry-run` (validate only)
    pub dry_run: bool,
}

/// Runs one deployment synchronously
///
/// Calls may block for as long as the backend takes; no timeout is applied.
pub trait DeployBackend {
    /// Human-readable command line for `artifact`, shown before running it
    fn command_line(&self, artifact: &ArtifactDescriptor, options: &DeployOptions) -> String;

    /// Deploy `artifact`. Launch failures and non-zero exits become failed
    /// outcomes rather than errors.
    fn deploy(&self, artifact: &ArtifactDescriptor, options: &DeployOptions) -> DeployOutcome;
}
