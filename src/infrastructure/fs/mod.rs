//! File System Implementations
//!
//! Concrete implementations of the ArtifactSource port.

mod scanner;

pub use scanner::DirectoryScanner;
