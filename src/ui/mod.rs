//! User interface module.
//!
//! This module renders fetched records for the terminal using `comfy-table`:
//! - List pages as tables with a pager line
//! - Single records as field/value tables
//! - Toast notifications

mod table;

pub use table::{agent_detail, agents_table, job_orders_table, pager_line, toast_line};
