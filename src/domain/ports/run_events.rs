//! Run Event Port
//!
//! Provides an observable interface for controller runs.
//! Enables console progress, JSON event streams, and test assertions.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::domain::entities::{ArtifactDescriptor, ArtifactKind, DeployOutcome};

/// Event emitted while a run is in progress
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Scan started
    ScanStarted { root: PathBuf },

    /// One kind's directory was listed
    KindScanned { kind: ArtifactKind, count: usize },

    /// Scan finished
    ScanCompleted { total: usize },

    /// Nothing to deploy
    CatalogEmpty,

    /// Continuous mode is starting with these bounds
    ContinuousStarted { min: Duration, max: Duration },

    /// Explicit-list run matched some artifacts
    ListSelected { requested: Vec<String>, matched: usize },

    /// Explicit-list run matched nothing
    NoMatches { requested: Vec<String> },

    /// A deployment is about to run
    DeployStarted {
        number: usize,
        artifact: ArtifactDescriptor,
        command: String,
        dry_run: bool,
        started_at: DateTime<Local>,
    },

    /// A deployment finished (successfully or not)
    DeployFinished {
        number: usize,
        artifact: ArtifactDescriptor,
        outcome: DeployOutcome,
    },

    /// Continuous mode will deploy again after `delay`
    NextScheduled { delay: Duration },
}

/// Trait for receiving run events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable terminal output
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait RunEventSink: Send + Sync {
    /// Handle a run event
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {
        // Do nothing
    }
}

impl<T: RunEventSink + ?Sized> RunEventSink for std::sync::Arc<T> {
    fn on_event(&self, event: RunEvent) {
        (**self).on_event(event)
    }
}
