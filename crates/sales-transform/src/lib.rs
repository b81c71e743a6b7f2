//! Cleaning stages for sales tables.
//!
//! Each stage takes a [`Table`](sales_model::Table) by reference and returns a
//! new one:
//!
//! - **schema**: canonical column names, trimmed text columns
//! - **coerce**: numeric parsing of the candidate numeric columns, dropping
//!   rows that fail to parse
//! - **filter**: dropping rows with negative numeric values
//! - **pipeline**: the three stages in order, with a per-stage report

mod active;
pub mod coerce;
pub mod filter;
pub mod pipeline;
pub mod schema;

pub use active::active_numeric_columns;
pub use coerce::{coerce_cell, coerce_numeric_columns};
pub use filter::filter_invalid_rows;
pub use pipeline::{CleanOutcome, CleanReport, Stage, StageReport, clean_table};
pub use schema::{normalize_column_name, normalize_schema};
