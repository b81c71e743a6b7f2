use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use sales_model::{LoadError, NumberFormat, Row, Table, is_integer_literal};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::inference::{ColumnKind, convert_cell, infer_column_kind, is_na_token};

/// A loaded table together with the kind inferred for each column.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub kinds: Vec<ColumnKind>,
}

impl LoadedTable {
    /// Names of the columns that were inferred as numeric.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.table
            .columns()
            .iter()
            .zip(&self.kinds)
            .filter(|(_, kind)| **kind == ColumnKind::Numeric)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Loads a CSV file into a [`Table`].
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be opened or is not valid
/// delimited text.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    load_table_with_kinds(path).map(|loaded| loaded.table)
}

/// Loads a CSV file, keeping the inferred column kinds.
///
/// # Errors
///
/// See [`load_table`].
pub fn load_table_with_kinds(path: &Path) -> Result<LoadedTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = load_from_reader(file)?;
    info!(
        path = %path.display(),
        rows = loaded.table.height(),
        columns = loaded.table.width(),
        "loaded csv"
    );
    Ok(loaded)
}

/// Loads CSV text from any reader.
///
/// # Errors
///
/// See [`load_table`].
pub fn load_table_from_reader<R: Read>(reader: R) -> Result<Table, LoadError> {
    load_from_reader(reader).map(|loaded| loaded.table)
}

fn load_from_reader<R: Read>(reader: R) -> Result<LoadedTable, LoadError> {
    let raw = read_csv_table(reader)?;
    let loaded = type_table(raw)?;
    debug!(numeric = ?loaded.numeric_columns(), "inferred column kinds");
    Ok(loaded)
}

fn type_table(raw: CsvTable) -> Result<LoadedTable, LoadError> {
    let CsvTable { headers, rows } = raw;
    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|idx| {
            infer_column_kind(
                rows.iter()
                    .map(|row| row.get(idx).map_or("", String::as_str)),
            )
        })
        .collect();
    let typed: Vec<Row> = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&kinds)
                .map(|(raw, kind)| convert_cell(raw, *kind))
                .collect()
        })
        .collect();
    let mut table = Table::from_rows(headers, typed)?;
    for (idx, kind) in kinds.iter().enumerate() {
        let decimal_text = rows.iter().any(|row| {
            row.get(idx)
                .is_some_and(|raw| !is_na_token(raw) && !is_integer_literal(raw))
        });
        if *kind == ColumnKind::Numeric && decimal_text {
            table.set_number_format(idx, NumberFormat::Float);
        }
    }
    Ok(LoadedTable { table, kinds })
}
