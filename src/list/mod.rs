//! List state module.
//!
//! This module contains the controller that owns a list view's filter and
//! pagination intent, including:
//! - `ListController`, reading and replacing the query held by a `History`
//! - `ListQuery`, the effective query handed to the data source
//! - `Loader`, deciding when the view has to fetch again

mod controller;
pub mod loader;

pub use controller::{ListController, ListQuery};
pub use loader::{Loader, Ticket};
