//! Configuration module for Randeploy
//!
//! Configuration is resolved once at startup, in priority order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Explicit `--config` file
//! 3. Project config (`./randeploy.toml`)
//! 4. User config (`~/.config/randeploy/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! The resolved `Config` is read-only for the rest of the process.

mod loader;
mod types;

pub use loader::{ConfigSource, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, ContinuousConfig, DeploySettings, KindsConfig, OutputConfig,
    ProjectConfig, ToolConfig, Verbosity,
};
