//! Event handling module.
//!
//! This module contains handlers for network events: data-source requests
//! whose results or failures are written into the application state.

pub mod network;
