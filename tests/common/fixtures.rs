//! Fake deploy tool scripts, run as `sh -c <script> sh <flags...>`.
//!
//! The deploy flags arrive as positional parameters, so `$2` is the
//! source path.

/// Succeeds and echoes the deployed path
pub const TOOL_SUCCEEDS: &str = r#"echo "Deploy succeeded: $2""#;

/// Fails with output on both streams
pub const TOOL_FAILS: &str = r#"echo "Component failures: $2"; echo "boom" >&2; exit 1"#;

/// Succeeds and echoes every flag it received
pub const TOOL_ECHOES_ARGS: &str = r#"echo "args: $@""#;

/// Default project root used by `TestEnv`
pub const PROJECT_ROOT: &str = "force-app/main/default";
