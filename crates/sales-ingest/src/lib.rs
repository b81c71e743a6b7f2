//! Sales data ingestion: CSV loading with per-column type inference.

pub mod csv_table;
pub mod inference;
pub mod loader;

pub use csv_table::{CsvTable, read_csv_table};
pub use inference::{ColumnKind, NA_TOKENS, infer_column_kind, is_na_token};
pub use loader::{LoadedTable, load_table, load_table_from_reader, load_table_with_kinds};
