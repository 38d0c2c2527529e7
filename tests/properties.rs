//! Property tests for Randeploy.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "always picks from the catalog".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/selector.rs"]
mod selector;

#[path = "properties/artifact_names.rs"]
mod artifact_names;

#[path = "properties/interval.rs"]
mod interval;
