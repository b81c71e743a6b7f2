//! Output generation for cleaned sales tables.
//!
//! - **writer**: CSV with a header line and one line per row, no index column
//! - **format**: number rendering shared with the schema normalizer

pub mod format;
mod writer;

pub use format::{MISSING_TEXT, format_number, render_cell, stringify_cell};
pub use writer::{write_table, write_table_to_writer};
