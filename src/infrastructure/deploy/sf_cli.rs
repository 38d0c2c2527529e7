//! `sf` CLI Deploy Backend
//!
//! Runs `sf project deploy start --source-dir <path> ...` for one artifact.
//! The program and subcommand are configurable so other tools (or a fake in
//! tests) can stand in for `sf`.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::config::ToolConfig;
use crate::domain::entities::{ArtifactDescriptor, DeployOutcome};
use crate::domain::ports::{DeployBackend, DeployOptions};

/// Deploy backend that shells out to the Salesforce CLI
///
/// Arguments are passed as an argv vector, never through a shell, so paths
/// with spaces or quotes need no escaping. The process inherits no stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfCliBackend {
    program: String,
    subcommand: Vec<String>,
}

impl SfCliBackend {
    pub fn new(program: impl Into<String>, subcommand: Vec<String>) -> Self {
        Self {
            program: program.into(),
            subcommand,
        }
    }

    pub fn from_config(tool: &ToolConfig) -> Self {
        Self::new(tool.program.clone(), tool.subcommand.clone())
    }

    /// Flags following the subcommand
    fn deploy_args(artifact: &ArtifactDescriptor, options: &DeployOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--source-dir".into(), artifact.path().into()];

        if let Some(level) = options.test_level {
            args.push("--test-level".into());
            args.push(level.as_str().into());
        }
        if options.ignore_warnings {
            args.push("--ignore-warnings".into());
        }
        if options.dry_run {
            args.push("--dry-run".into());
        }

        args
    }
}

impl Default for SfCliBackend {
    fn default() -> Self {
        Self::from_config(&ToolConfig::default())
    }
}

impl DeployBackend for SfCliBackend {
    fn command_line(&self, artifact: &ArtifactDescriptor, options: &DeployOptions) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.subcommand.len() + 6);
        parts.push(self.program.clone());
        parts.extend(self.subcommand.iter().cloned());
        parts.push(format!("--source-dir \"{}\"", artifact.path().display()));

        if let Some(level) = options.test_level {
            parts.push(format!("--test-level {}", level));
        }
        if options.ignore_warnings {
            parts.push("--ignore-warnings".to_string());
        }
        if options.dry_run {
            parts.push("--dry-run".to_string());
        }

        parts.join(" ")
    }

    fn deploy(&self, artifact: &ArtifactDescriptor, options: &DeployOptions) -> DeployOutcome {
        let result = Command::new(&self.program)
            .args(&self.subcommand)
            .args(Self::deploy_args(artifact, options))
            .stdin(Stdio::null())
            .output();

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                return DeployOutcome::failure(
                    format!("failed to launch '{}': {}", self.program, e),
                    None,
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if output.status.success() {
            return DeployOutcome::success(stdout.trim_end());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = [stdout.trim_end(), stderr.trim_end()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        DeployOutcome::failure(combined, output.status.code())
    }
}
