#![deny(unsafe_code)]

use crate::{NumberFormat, SchemaError};

/// A single cell of a sales table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the numeric value, or `None` for text and missing cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) | Self::Missing => None,
        }
    }
}

/// One record, positionally aligned with [`Table::columns`].
pub type Row = Vec<CellValue>;

/// An ordered, in-memory table whose rows all share the same columns.
///
/// Each column also carries a [`NumberFormat`]. Adding or rewriting cells
/// widens it; removing rows leaves it alone.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<String>,
    formats: Vec<NumberFormat>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            formats: vec![NumberFormat::default(); columns.len()],
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table, checking every row against the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, SchemaError> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Row) -> Result<(), SchemaError> {
        if row.len() != self.columns.len() {
            return Err(SchemaError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        for (format, cell) in self.formats.iter_mut().zip(&row) {
            *format = format.widen(cell);
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn number_formats(&self) -> &[NumberFormat] {
        &self.formats
    }

    /// Format of the column at `idx`; out-of-range columns read as the default.
    pub fn number_format(&self, idx: usize) -> NumberFormat {
        self.formats.get(idx).copied().unwrap_or_default()
    }

    pub fn set_number_format(&mut self, idx: usize, format: NumberFormat) {
        if let Some(slot) = self.formats.get_mut(idx) {
            *slot = format;
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the cell at `row` in the named column.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(idx))
    }

    /// Iterates the cells of a single column in row order.
    pub fn column_values<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = &'a CellValue> + use<'a>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().filter_map(move |row| row.get(idx)))
    }

    /// Returns a new table holding only the rows accepted by `keep`, in order.
    pub fn filter_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[CellValue]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            formats: self.formats.clone(),
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }

    /// Rewrites every cell of the column at `idx` in place.
    pub fn map_column<F>(&mut self, idx: usize, mut f: F)
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        let Some(format) = self.formats.get_mut(idx) else {
            return;
        };
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = f(cell);
                *format = format.widen(cell);
            }
        }
    }

    /// Replaces the column names, keeping the rows.
    pub fn with_columns(self, columns: Vec<String>) -> Result<Table, SchemaError> {
        if columns.len() != self.columns.len() {
            return Err(SchemaError::ColumnCount {
                expected: self.columns.len(),
                actual: columns.len(),
            });
        }
        Ok(Table {
            columns,
            formats: self.formats,
            rows: self.rows,
        })
    }
}
