//! Tests for sales-model types.

use sales_model::{CellValue, NumberFormat, SchemaError, Table};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let err = Table::from_rows(
        columns(&["a", "b"]),
        vec![
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
            vec![CellValue::Number(3.0)],
        ],
    )
    .expect_err("ragged row");
    assert_eq!(
        err,
        SchemaError::RowWidth {
            row: 1,
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn lookup_by_column_name() {
    let table = Table::from_rows(
        columns(&["product_name", "qty"]),
        vec![
            vec![CellValue::text("Widget"), CellValue::Number(3.0)],
            vec![CellValue::text("Gadget"), CellValue::Missing],
        ],
    )
    .expect("table");

    assert_eq!(table.height(), 2);
    assert_eq!(table.width(), 2);
    assert_eq!(table.column_index("qty"), Some(1));
    assert!(!table.has_column("price"));
    assert_eq!(table.cell(0, "qty"), Some(&CellValue::Number(3.0)));
    assert_eq!(table.cell(1, "product_name").and_then(CellValue::as_text), Some("Gadget"));
    let qty: Vec<_> = table.column_values("qty").expect("qty column").collect();
    assert_eq!(qty, vec![&CellValue::Number(3.0), &CellValue::Missing]);
}

#[test]
fn filter_rows_leaves_source_untouched() {
    let table = Table::from_rows(
        columns(&["qty"]),
        vec![
            vec![CellValue::Number(1.0)],
            vec![CellValue::Number(-1.0)],
            vec![CellValue::Number(2.0)],
        ],
    )
    .expect("table");

    let kept = table.filter_rows(|row| row[0].as_number().is_some_and(|v| v >= 0.0));

    assert_eq!(table.height(), 3);
    assert_eq!(kept.columns(), table.columns());
    assert_eq!(
        kept.rows(),
        &[vec![CellValue::Number(1.0)], vec![CellValue::Number(2.0)]]
    );
}

#[test]
fn with_columns_checks_count() {
    let table = Table::new(columns(&["a", "b"]));
    let err = table.with_columns(columns(&["a"])).expect_err("count mismatch");
    assert_eq!(
        err,
        SchemaError::ColumnCount {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn cell_value_serializes_tagged() {
    let json = serde_json::to_string(&CellValue::Number(9.5)).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"Number","value":9.5}"#);
    let round: CellValue =
        serde_json::from_str(r#"{"kind":"Text","value":"Widget"}"#).expect("deserialize cell");
    assert_eq!(round, CellValue::text("Widget"));
    let missing = serde_json::to_string(&CellValue::Missing).expect("serialize missing");
    assert_eq!(missing, r#"{"kind":"Missing"}"#);
}

#[test]
fn number_formats_widen_on_write_and_survive_row_removal() {
    let mut table = Table::from_rows(
        columns(&["order_id", "qty", "total"]),
        vec![
            vec![CellValue::Number(1.0), CellValue::Number(3.0), CellValue::Number(29.97)],
            vec![CellValue::Number(2.0), CellValue::Missing, CellValue::Number(25.0)],
        ],
    )
    .expect("table");
    assert_eq!(
        table.number_formats(),
        &[NumberFormat::Integer, NumberFormat::Float, NumberFormat::Float]
    );

    let kept = table.filter_rows(|row| !row[1].is_missing());
    assert_eq!(kept.height(), 1);
    assert_eq!(kept.number_format(1), NumberFormat::Float);
    assert_eq!(kept.number_format(2), NumberFormat::Float);

    table.map_column(0, |_| CellValue::Missing);
    assert_eq!(table.number_format(0), NumberFormat::Float);
    assert_eq!(table.number_format(9), NumberFormat::Integer);
}
