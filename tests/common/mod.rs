//! Common test utilities for Randeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project with a fake deploy tool
//! - Fixtures: Reusable tool scripts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
