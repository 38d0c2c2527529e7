//! Directory scanner
//!
//! Lists the conventional per-kind subdirectories of a project root and turns
//! matching entries into artifact descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{ArtifactDescriptor, ArtifactKind, ArtifactLayout, Catalog};
use crate::domain::ports::ArtifactSource;
use crate::error::{RandeployError, RandeployResult};

/// Scans `<root>/<kind dir>` for each requested kind
///
/// Read-only. Missing kind directories are skipped. Entries are sorted by
/// name within a kind so output is stable across platforms.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
}

impl DirectoryScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn scan_kind(&self, kind: ArtifactKind, dir: &Path) -> RandeployResult<Vec<ArtifactDescriptor>> {
        let scan_err = |source: std::io::Error| RandeployError::ScanFailed {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(scan_err)? {
            paths.push(entry.map_err(scan_err)?.path());
        }
        paths.sort();

        let artifacts = paths
            .iter()
            .filter_map(|path| match kind.layout() {
                ArtifactLayout::File { .. } if path.is_file() => {
                    ArtifactDescriptor::from_file(kind, path)
                }
                ArtifactLayout::Bundle if path.is_dir() && !is_hidden(path) => {
                    ArtifactDescriptor::from_bundle(kind, path)
                }
                _ => None,
            })
            .collect();

        Ok(artifacts)
    }
}

impl ArtifactSource for DirectoryScanner {
    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, kinds: &[ArtifactKind]) -> RandeployResult<Catalog> {
        let mut catalog = Catalog::new();

        for &kind in kinds {
            let dir = self.root.join(kind.dir_name());
            if !dir.is_dir() {
                continue;
            }
            let artifacts = self.scan_kind(kind, &dir)?;
            catalog.add_kind(kind, artifacts);
        }

        Ok(catalog)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
