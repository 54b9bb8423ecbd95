//! Administrative console for foreign agent records and their job orders.
//!
//! The list views keep their filter and pagination state in the location
//! query. `query::codec` translates between that query and positional filter
//! values, `list::ListController` reads and replaces it through a
//! `navigation::History`, and `api` fetches the page it describes.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod list;
pub mod logger;
pub mod navigation;
pub mod query;
pub mod state;
pub mod ui;
