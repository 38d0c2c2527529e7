//! Deploy Backend Implementations

mod sf_cli;

pub use sf_cli::SfCliBackend;
