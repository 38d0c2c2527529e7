//! Error types for Randeploy
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! A failed deployment is not an error: it is a `DeployOutcome` with
//! `success == false`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Randeploy operations
pub type RandeployResult<T> = Result<T, RandeployError>;

/// Main error type for Randeploy operations
#[derive(Error, Debug)]
pub enum RandeployError {
    /// Nothing deployable was found for the enabled kinds
    #[error("no components available for deployment")]
    EmptyCatalog,

    /// A flag that requires a value was given without one
    #[error("missing value for '{flag}'")]
    MissingArgument { flag: String },

    /// Continuous-mode bounds are inverted
    #[error("invalid interval: min ({min}ms) is greater than max ({max}ms)")]
    InvalidInterval { min: u64, max: u64 },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file given explicitly but not present
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Unrecognized test level string
    #[error("unknown test level '{value}' (expected NoTestRun, RunSpecifiedTests, RunLocalTests or RunAllTestsInOrg)")]
    UnknownTestLevel { value: String },

    /// Listing an artifact directory failed
    #[error("failed to scan {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
