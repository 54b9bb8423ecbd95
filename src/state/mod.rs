//! Application state management module.
//!
//! This module contains the client-side cache of fetched records, including:
//! - Main `State` struct holding the last fetched pages and detail record
//! - Per-resource `Loader`s deciding when lists must be fetched again
//! - `Toast` notifications raised by failed requests
//! - State error handling

mod error;
mod state_impl;
mod toast;

pub use error::StateError;
pub use state_impl::State;
pub use toast::{Toast, ToastLevel};
