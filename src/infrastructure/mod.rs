//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory scanning for artifacts
//! - `deploy/` - The `sf` CLI deploy backend
//! - `events/` - Run event sinks
//! - `sleep` - Wall-clock sleeper for continuous mode

pub mod deploy;
pub mod events;
pub mod fs;
pub mod sleep;

// Re-export for convenience
pub use deploy::SfCliBackend;
pub use events::JsonEventSink;
pub use fs::DirectoryScanner;
pub use sleep::ThreadSleeper;
