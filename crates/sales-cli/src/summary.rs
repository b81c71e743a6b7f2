use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_cli::pipeline::PipelineRun;
use sales_model::{CellValue, NumberFormat, Table as SalesTable};
use sales_output::render_cell;
use sales_transform::active_numeric_columns;

use crate::types::{ColumnRole, ColumnSummary};

pub fn print_summary(run: &PipelineRun) {
    println!("Input: {}", run.input.display());
    match &run.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Dropped"),
        header_cell("Numeric columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("load").fg(Color::Cyan),
        dim_cell("-"),
        Cell::new(run.loaded_rows),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    for stage in &run.report.stages {
        let numeric = if stage.numeric_columns.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(stage.numeric_columns.join(", "))
        };
        table.add_row(vec![
            Cell::new(stage.stage.as_str()).fg(Color::Cyan),
            Cell::new(stage.rows_in),
            Cell::new(stage.rows_out),
            count_cell(stage.dropped(), Color::Yellow),
            numeric,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(run.loaded_rows).add_attribute(Attribute::Bold),
        Cell::new(run.table.height()).add_attribute(Attribute::Bold),
        count_cell(run.report.total_dropped(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell(format!("{:.2?}", run.elapsed)),
    ]);
    println!("{table}");
}

/// Prints the first `rows` rows of the cleaned table.
pub fn print_preview(data: &SalesTable, rows: usize) {
    if rows == 0 {
        return;
    }
    let numeric = active_numeric_columns(data);
    let mut table = Table::new();
    table.set_header(data.columns().iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for (idx, name) in data.columns().iter().enumerate() {
        if numeric.contains(name) {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    for row in data.rows().iter().take(rows) {
        table.add_row(
            row.iter()
                .zip(data.number_formats())
                .map(|(cell, format)| preview_cell(cell, *format)),
        );
    }
    println!();
    println!(
        "Preview ({} of {} rows):",
        rows.min(data.height()),
        data.height()
    );
    println!("{table}");
}

pub fn print_inspect(columns: &[ColumnSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Normalized"),
        header_cell("Loaded as"),
        header_cell("Cleaning"),
    ]);
    apply_table_style(&mut table);
    for column in columns {
        let normalized = if column.normalized == column.source {
            dim_cell(&column.normalized)
        } else {
            Cell::new(&column.normalized)
        };
        let role = match column.role {
            ColumnRole::Text => Cell::new(column.role.label()).fg(Color::Green),
            ColumnRole::Numeric => Cell::new(column.role.label()).fg(Color::Cyan),
            ColumnRole::Passthrough => dim_cell(column.role.label()),
        };
        table.add_row(vec![
            Cell::new(format!("{:?}", column.source)),
            normalized,
            Cell::new(column.kind.as_str()),
            role,
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn preview_cell(cell: &CellValue, format: NumberFormat) -> Cell {
    match cell {
        CellValue::Missing => dim_cell("NaN"),
        other => Cell::new(render_cell(other, format)),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
