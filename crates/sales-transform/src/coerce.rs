//! Numeric coercion of the candidate numeric columns.

use tracing::{debug, info, trace};

use sales_model::{CellValue, NumberFormat, Table, is_integer_literal, parse_f64};

use crate::active::{active_numeric_columns, active_numeric_indices};

/// Parses a cell as a number without raising errors.
///
/// Numbers pass through, text is parsed ignoring surrounding whitespace and
/// anything that fails to parse (blank text, NaN included) becomes
/// [`CellValue::Missing`].
pub fn coerce_cell(cell: &CellValue) -> CellValue {
    let value = match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(text) => parse_f64(text),
        CellValue::Missing => None,
    };
    match value {
        Some(value) if !value.is_nan() => CellValue::Number(value),
        _ => CellValue::Missing,
    }
}

/// Converts every active numeric column to numbers and drops rows left with
/// a missing value in any of them.
///
/// A column that held decimal or unparseable text becomes a float column,
/// even when every surviving value is whole. A table without active numeric
/// columns is returned unchanged.
pub fn coerce_numeric_columns(table: &Table) -> Table {
    let indices = active_numeric_indices(table);
    if indices.is_empty() {
        debug!("no numeric columns to coerce");
        return table.clone();
    }

    let mut coerced = table.clone();
    for &idx in &indices {
        let decimal_text = table
            .rows()
            .iter()
            .filter_map(|row| row.get(idx).and_then(CellValue::as_text))
            .any(|text| !is_integer_literal(text));
        coerced.map_column(idx, coerce_cell);
        if decimal_text {
            coerced.set_number_format(idx, NumberFormat::Float);
        }
    }

    let mut row = 0usize;
    let out = coerced.filter_rows(|cells| {
        let keep = indices
            .iter()
            .all(|&idx| cells.get(idx).is_some_and(|cell| !cell.is_missing()));
        if !keep {
            trace!(row, "dropping row with unparseable numeric value");
        }
        row += 1;
        keep
    });

    info!(
        numeric = ?active_numeric_columns(&out),
        rows_in = table.height(),
        rows_out = out.height(),
        "coerced numeric columns"
    );
    out
}
