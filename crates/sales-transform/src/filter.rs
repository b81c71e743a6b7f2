//! Removal of rows holding negative values in numeric columns.

use tracing::{debug, info, trace};

use sales_model::{CellValue, Table};

use crate::active::active_numeric_indices;

fn is_negative(cell: &CellValue) -> bool {
    cell.as_number().is_some_and(|value| value < 0.0)
}

/// Drops every row with a value below zero in any active numeric column.
///
/// Columns are applied one after another; each removes its own negative
/// rows. Cells that are not numbers never remove a row.
pub fn filter_invalid_rows(table: &Table) -> Table {
    let indices = active_numeric_indices(table);
    if indices.is_empty() {
        debug!("no numeric columns to filter");
        return table.clone();
    }

    let mut out = table.clone();
    for idx in indices {
        let column = &table.columns()[idx];
        let before = out.height();
        out = out.filter_rows(|cells| !cells.get(idx).is_some_and(is_negative));
        let dropped = before - out.height();
        if dropped > 0 {
            trace!(column = %column, dropped, "removed negative values");
        }
    }

    info!(
        rows_in = table.height(),
        rows_out = out.height(),
        "filtered invalid rows"
    );
    out
}
