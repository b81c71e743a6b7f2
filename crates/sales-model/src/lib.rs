//! Data model for the sales cleaning pipeline.
//!
//! A [`Table`] is an ordered list of rows of [`CellValue`]s that share one
//! column list, plus a [`NumberFormat`] per column deciding how its numbers
//! are written. Stages never mutate their input; they build a new table.

pub mod columns;
pub mod error;
pub mod number;
pub mod table;

pub use columns::{NUMERIC_CANDIDATES, TEXT_COLUMNS, is_numeric_candidate, is_text_column};
pub use error::{LoadError, PipelineError, Result, SchemaError, WriteError};
pub use number::{NumberFormat, is_integer_literal, parse_f64};
pub use table::{CellValue, Row, Table};
