//! Result of one deployment attempt

use chrono::{DateTime, Local};
use serde::Serialize;

/// Outcome of invoking the deploy tool once
///
/// Not persisted; used for console reporting and run counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployOutcome {
    pub success: bool,
    /// Captured stdout on success; stdout and stderr (or the launch error) on failure
    pub output: String,
    /// Exit code, when the process ran to an exit status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub finished_at: DateTime<Local>,
}

impl DeployOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            exit_code: Some(0),
            finished_at: Local::now(),
        }
    }

    pub fn failure(output: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            success: false,
            output: output.into(),
            exit_code,
            finished_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_zero_exit_code() {
        let outcome = DeployOutcome::success("Deploy succeeded");
        assert!(outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[test]
    fn launch_failure_has_no_exit_code() {
        let outcome = DeployOutcome::failure("No such file or directory", None);
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, None);

        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("exit_code").is_none());
    }
}
