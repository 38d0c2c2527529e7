//! ArtifactSource port - where catalogs come from

use std::path::Path;

use crate::domain::entities::{ArtifactKind, Catalog};
use crate::error::RandeployResult;

/// Produces a fresh catalog of deployable artifacts
///
/// Implementations:
/// - `DirectoryScanner` - reads the project tree on disk
/// - in-memory sources in tests
pub trait ArtifactSource {
    /// Root the catalog is built from (for reporting)
    fn root(&self) -> &Path;

    /// Scan for artifacts of the given kinds.
    ///
    /// Kinds whose directory is missing are skipped, not reported as errors.
    fn scan(&self, kinds: &[ArtifactKind]) -> RandeployResult<Catalog>;
}
