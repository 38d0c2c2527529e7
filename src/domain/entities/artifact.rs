//! Artifact entity
//!
//! One deployable unit found under the project root: an Apex class, a
//! trigger, or a component bundle directory.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of deployable artifact
///
/// Each kind maps to one conventional subdirectory of the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ArtifactKind {
    /// `classes/*.cls`
    ApexClass,
    /// `triggers/*.trigger`
    ApexTrigger,
    /// `lwc/<bundle>/`
    LightningComponentBundle,
    /// `aura/<bundle>/`
    AuraBundle,
}

/// How artifacts of a kind are laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactLayout {
    /// One file per artifact, with a `-meta.xml` sidecar
    File { extension: &'static str },
    /// One directory per artifact
    Bundle,
}

impl ArtifactKind {
    /// All kinds, in scan order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::ApexClass,
        ArtifactKind::ApexTrigger,
        ArtifactKind::LightningComponentBundle,
        ArtifactKind::AuraBundle,
    ];

    /// Subdirectory of the project root holding this kind
    pub fn dir_name(&self) -> &'static str {
        match self {
            ArtifactKind::ApexClass => "classes",
            ArtifactKind::ApexTrigger => "triggers",
            ArtifactKind::LightningComponentBundle => "lwc",
            ArtifactKind::AuraBundle => "aura",
        }
    }

    pub fn layout(&self) -> ArtifactLayout {
        match self {
            ArtifactKind::ApexClass => ArtifactLayout::File { extension: "cls" },
            ArtifactKind::ApexTrigger => ArtifactLayout::File {
                extension: "trigger",
            },
            ArtifactKind::LightningComponentBundle | ArtifactKind::AuraBundle => {
                ArtifactLayout::Bundle
            }
        }
    }

    /// Key used under `[kinds]` in the config file
    pub fn config_key(&self) -> &'static str {
        match self {
            ArtifactKind::ApexClass => "apex_classes",
            ArtifactKind::ApexTrigger => "triggers",
            ArtifactKind::LightningComponentBundle => "lwc",
            ArtifactKind::AuraBundle => "aura",
        }
    }

    /// Plural label for scan progress ("Found 3 Apex classes")
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::ApexClass => "Apex classes",
            ArtifactKind::ApexTrigger => "triggers",
            ArtifactKind::LightningComponentBundle => "LWC components",
            ArtifactKind::AuraBundle => "Aura components",
        }
    }

    /// Metadata API type name
    pub fn metadata_type(&self) -> &'static str {
        match self {
            ArtifactKind::ApexClass => "ApexClass",
            ArtifactKind::ApexTrigger => "ApexTrigger",
            ArtifactKind::LightningComponentBundle => "LightningComponentBundle",
            ArtifactKind::AuraBundle => "AuraDefinitionBundle",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.metadata_type())
    }
}

/// A deployable artifact found by a scan
///
/// Immutable once built. Names are unique per kind within one scan; two
/// kinds may share a name (a class and a trigger both called `Account`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactDescriptor {
    kind: ArtifactKind,
    name: String,
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta_path: Option<PathBuf>,
}

impl ArtifactDescriptor {
    /// Build a descriptor for a file-based kind.
    ///
    /// Returns `None` if `path` does not carry the kind's extension, or if
    /// the kind is a bundle kind. The metadata path is always derived
    /// (`<file>-meta.xml`), whether or not it exists on disk.
    pub fn from_file(kind: ArtifactKind, path: &Path) -> Option<Self> {
        let ArtifactLayout::File { extension } = kind.layout() else {
            return None;
        };

        let file_name = path.file_name()?.to_str()?;
        let name = file_name.strip_suffix(extension)?.strip_suffix('.')?;
        if name.is_empty() {
            return None;
        }

        let mut meta = path.as_os_str().to_owned();
        meta.push("-meta.xml");

        Some(Self {
            kind,
            name: name.to_string(),
            path: path.to_path_buf(),
            meta_path: Some(PathBuf::from(meta)),
        })
    }

    /// Build a descriptor for a bundle kind from its directory.
    pub fn from_bundle(kind: ArtifactKind, dir: &Path) -> Option<Self> {
        if kind.layout() != ArtifactLayout::Bundle {
            return None;
        }

        let name = dir.file_name()?.to_str()?;
        Some(Self {
            kind,
            name: name.to_string(),
            path: dir.to_path_buf(),
            meta_path: None,
        })
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta_path(&self) -> Option<&Path> {
        self.meta_path.as_deref()
    }
}
