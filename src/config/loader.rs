//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RandeployError, RandeployResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "randeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// Result of config discovery
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Resolve configuration for a run started in `cwd`.
    ///
    /// An explicit path must exist. Project and user files are optional, but
    /// a file that exists and fails to parse is an error.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> RandeployResult<Self> {
        let user_file = dirs::config_dir().map(|d| d.join("randeploy").join("config.toml"));
        discover_with(explicit, cwd, user_file.as_deref())
    }
}

pub(crate) fn discover_with(
    explicit: Option<&Path>,
    cwd: &Path,
    user_file: Option<&Path>,
) -> RandeployResult<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(RandeployError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config,
            warnings,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    let project_file = cwd.join(PROJECT_CONFIG_FILE);
    if project_file.is_file() {
        let (config, warnings) = load_with_warnings(&project_file)?;
        return Ok(LoadedConfig {
            config,
            warnings,
            source: ConfigSource::Project(project_file),
        });
    }

    if let Some(user_file) = user_file.filter(|p| p.is_file()) {
        let (config, warnings) = load_with_warnings(user_file)?;
        return Ok(LoadedConfig {
            config,
            warnings,
            source: ConfigSource::User(user_file.to_path_buf()),
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
        warnings: Vec::new(),
        source: ConfigSource::Defaults,
    })
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RandeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RandeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "root",
        "kinds",
        "apex_classes",
        "triggers",
        "lwc",
        "aura",
        "deploy",
        "test_level",
        "ignore_warnings",
        "dry_run",
        "continuous",
        "min_interval_ms",
        "max_interval_ms",
        "tool",
        "program",
        "subcommand",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
