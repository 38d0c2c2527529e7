//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_source;
pub mod deploy_backend;
pub mod run_events;
pub mod sleeper;

pub use artifact_source::ArtifactSource;
pub use deploy_backend::{DeployBackend, DeployOptions};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
pub use sleeper::Sleeper;
