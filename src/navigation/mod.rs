//! Navigation module.
//!
//! This module contains the navigation/history collaborator the list
//! controller reads from and writes to:
//! - `History` trait for the externally-owned query
//! - `MemoryHistory`, an in-memory implementation with back/forward
//! - `Location`, a path plus query that renders to a shareable string

mod history;
mod location;

pub use history::{History, MemoryHistory};
pub use location::Location;
