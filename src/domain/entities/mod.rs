//! Domain Entities

mod artifact;
mod catalog;
mod outcome;

pub use artifact::{ArtifactDescriptor, ArtifactKind, ArtifactLayout};
pub use catalog::{Catalog, KindCount};
pub use outcome::DeployOutcome;
