//! Domain Services
//!
//! Stateless rules operating on catalogs.

mod selector;

pub use selector::{pick_by_names, pick_random};
