//! Catalog entity - the result of one scan

use serde::Serialize;

use super::artifact::{ArtifactDescriptor, ArtifactKind};

/// Number of artifacts found for one kind whose directory existed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: ArtifactKind,
    pub count: usize,
}

/// In-memory list of artifacts produced by one scan
///
/// Order is not part of the contract; callers must not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artifacts: Vec<ArtifactDescriptor>,
    scanned: Vec<KindCount>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the artifacts found for one kind and record its count.
    pub fn add_kind(&mut self, kind: ArtifactKind, artifacts: Vec<ArtifactDescriptor>) {
        self.scanned.push(KindCount {
            kind,
            count: artifacts.len(),
        });
        self.artifacts.extend(artifacts);
    }

    pub fn artifacts(&self) -> &[ArtifactDescriptor] {
        &self.artifacts
    }

    /// Per-kind counts, only for kinds whose directory was present
    pub fn scanned(&self) -> &[KindCount] {
        &self.scanned
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl FromIterator<ArtifactDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = ArtifactDescriptor>>(iter: I) -> Self {
        let artifacts: Vec<ArtifactDescriptor> = iter.into_iter().collect();
        let mut scanned: Vec<KindCount> = Vec::new();
        for artifact in &artifacts {
            match scanned.iter_mut().find(|c| c.kind == artifact.kind()) {
                Some(entry) => entry.count += 1,
                None => scanned.push(KindCount {
                    kind: artifact.kind(),
                    count: 1,
                }),
            }
        }
        Self { artifacts, scanned }
    }
}
