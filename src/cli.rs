use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use randeploy::application::RunMode;
use randeploy::config::Verbosity;
use randeploy::{Config, RandeployError, RandeployResult, TestLevel};

/// Randeploy - deploy random Salesforce components
#[derive(Parser, Debug)]
#[command(name = "randeploy")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["once", "continuous", "components"])))]
#[command(after_help = "Examples:
  randeploy --once
  randeploy --continuous
  randeploy --components \"AccountHandler,ParkService\"
  randeploy --once --dry-run")]
pub struct Cli {
    /// Deploy one random component (default)
    #[arg(long)]
    pub once: bool,

    /// Keep deploying random components at random intervals
    #[arg(long)]
    pub continuous: bool,

    /// Deploy specific components (comma-separated names)
    #[arg(long, value_name = "NAMES", num_args = 0..=1)]
    pub components: Option<Option<String>>,

    /// Validate without deploying
    #[arg(long)]
    pub dry_run: bool,

    /// Project root holding classes/, triggers/, lwc/, aura/
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Test level passed to the deploy tool ("none" to omit)
    #[arg(long, value_name = "LEVEL")]
    pub test_level: Option<String>,

    /// Shortest wait between continuous deployments, in milliseconds
    #[arg(long, value_name = "MS")]
    pub min_interval: Option<u64>,

    /// Longest wait between continuous deployments, in milliseconds
    #[arg(long, value_name = "MS")]
    pub max_interval: Option<u64>,

    /// Configuration file (defaults to ./randeploy.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Show metadata paths and exit codes
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print deployment outcomes
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Run mode selected by the mode flags
    ///
    /// `--components` without names is an error rather than a fallback to
    /// a single random run.
    pub fn run_mode(&self) -> RandeployResult<RunMode> {
        if self.continuous {
            return Ok(RunMode::Continuous);
        }

        match &self.components {
            None => Ok(RunMode::Once),
            Some(value) => {
                let names = parse_component_list(value.as_deref().unwrap_or(""));
                if names.is_empty() {
                    return Err(RandeployError::MissingArgument {
                        flag: "--components".to_string(),
                    });
                }
                Ok(RunMode::Components(names))
            }
        }
    }

    /// Overlay command-line flags on a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) -> RandeployResult<()> {
        if let Some(root) = &self.root {
            config.project.root = root.clone();
        }
        if self.dry_run {
            config.deploy.dry_run = true;
        }
        if let Some(level) = &self.test_level {
            config.deploy.test_level = parse_test_level(level)?;
        }
        if let Some(min) = self.min_interval {
            config.continuous.min_interval_ms = min;
        }
        if let Some(max) = self.max_interval {
            config.continuous.max_interval_ms = max;
        }
        if self.verbose {
            config.output.verbosity = Verbosity::Verbose;
        }
        if self.quiet {
            config.output.verbosity = Verbosity::Quiet;
        }
        config.validate()
    }
}

fn parse_component_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_test_level(raw: &str) -> RandeployResult<Option<TestLevel>> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
