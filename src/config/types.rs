//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ArtifactKind;
use crate::domain::ports::DeployOptions;
use crate::domain::value_objects::{IntervalBounds, TestLevel};
use crate::error::RandeployResult;

use super::loader::{self, ConfigWarning};

/// Project layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory holding `classes/`, `triggers/`, `lwc/`, `aura/`
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("force-app/main/default")
}

/// Which artifact kinds take part in selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindsConfig {
    #[serde(default = "default_true")]
    pub apex_classes: bool,

    #[serde(default = "default_true")]
    pub triggers: bool,

    #[serde(default)]
    pub lwc: bool,

    #[serde(default)]
    pub aura: bool,
}

impl Default for KindsConfig {
    fn default() -> Self {
        Self {
            apex_classes: true,
            triggers: true,
            lwc: false,
            aura: false,
        }
    }
}

impl KindsConfig {
    pub fn is_enabled(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::ApexClass => self.apex_classes,
            ArtifactKind::ApexTrigger => self.triggers,
            ArtifactKind::LightningComponentBundle => self.lwc,
            ArtifactKind::AuraBundle => self.aura,
        }
    }
}

/// Deployment switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySettings {
    /// `"none"` in TOML leaves `--test-level` off the command line
    #[serde(default = "default_test_level", with = "test_level_setting")]
    pub test_level: Option<TestLevel>,

    #[serde(default = "default_true")]
    pub ignore_warnings: bool,

    #[serde(default)]
    pub dry_run: bool,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            test_level: default_test_level(),
            ignore_warnings: true,
            dry_run: false,
        }
    }
}

fn default_test_level() -> Option<TestLevel> {
    Some(TestLevel::NoTestRun)
}

mod test_level_setting {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::value_objects::TestLevel;

    const UNSET: &str = "none";

    pub fn serialize<S>(value: &Option<TestLevel>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(level) => serializer.serialize_str(level.as_str()),
            None => serializer.serialize_str(UNSET),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TestLevel>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(UNSET) {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Continuous mode timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousConfig {
    #[serde(default = "default_min_interval")]
    pub min_interval_ms: u64,

    #[serde(default = "default_max_interval")]
    pub max_interval_ms: u64,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval(),
            max_interval_ms: default_max_interval(),
        }
    }
}

fn default_min_interval() -> u64 {
    30_000
}

fn default_max_interval() -> u64 {
    60_000
}

/// External deploy tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Words placed between the program and the deploy flags
    #[serde(default = "default_subcommand")]
    pub subcommand: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            subcommand: default_subcommand(),
        }
    }
}

fn default_program() -> String {
    "sf".to_string()
}

fn default_subcommand() -> Vec<String> {
    vec![
        "project".to_string(),
        "deploy".to_string(),
        "start".to_string(),
    ]
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub kinds: KindsConfig,

    #[serde(default)]
    pub deploy: DeploySettings,

    #[serde(default)]
    pub continuous: ContinuousConfig,

    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RandeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RandeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Kinds enabled for scanning, in scan order
    pub fn enabled_kinds(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.kinds.is_enabled(*kind))
            .collect()
    }

    /// Switches forwarded to the deploy tool
    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions {
            test_level: self.deploy.test_level,
            ignore_warnings: self.deploy.ignore_warnings,
            dry_run: self.deploy.dry_run,
        }
    }

    /// Continuous-mode bounds, validated
    pub fn interval(&self) -> RandeployResult<IntervalBounds> {
        IntervalBounds::new(
            self.continuous.min_interval_ms,
            self.continuous.max_interval_ms,
        )
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> RandeployResult<()> {
        self.interval().map(|_| ())
    }
}
