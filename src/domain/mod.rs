//! Domain Layer
//!
//! Pure types and rules for picking artifacts to deploy.
//!
//! ## Structure
//!
//! - `entities/` - Artifact descriptors, catalogs, deploy outcomes
//! - `value_objects/` - Test levels and interval bounds
//! - `services/` - Artifact selection
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in here touches the file system or spawns processes; all I/O goes
//! through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
