use std::fs;
use std::path::PathBuf;

use sales_ingest::{ColumnKind, load_table, load_table_from_reader, load_table_with_kinds};
use sales_model::{CellValue, LoadError, NumberFormat};

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_columns_and_rows_in_file_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "sales.csv",
        "Product Name,Unit Price,Qty\n  Widget  ,9.99,3\nGadget,abc,1\n",
    );

    let table = load_table(&path).expect("load csv");

    assert_eq!(table.columns(), ["Product Name", "Unit Price", "Qty"]);
    assert_eq!(
        table.rows(),
        &[
            vec![
                CellValue::text("  Widget  "),
                CellValue::text("9.99"),
                CellValue::Number(3.0),
            ],
            vec![
                CellValue::text("Gadget"),
                CellValue::text("abc"),
                CellValue::Number(1.0),
            ],
        ]
    );
}

#[test]
fn reports_inferred_kinds() {
    let loaded = load_table_from_reader("price,note\n1.5,\n,hello\n".as_bytes())
        .expect("load csv");
    assert_eq!(
        loaded.rows(),
        &[
            vec![CellValue::Number(1.5), CellValue::Missing],
            vec![CellValue::Missing, CellValue::text("hello")],
        ]
    );

    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "kinds.csv", "price,note\n1.5,\n,hello\n");
    let with_kinds = load_table_with_kinds(&path).expect("load csv");
    assert_eq!(with_kinds.kinds, vec![ColumnKind::Numeric, ColumnKind::Text]);
    assert_eq!(with_kinds.numeric_columns(), vec!["price"]);
}

#[test]
fn header_only_file_has_no_rows() {
    let table = load_table_from_reader("a,b\n".as_bytes()).expect("load csv");
    assert_eq!(table.columns(), ["a", "b"]);
    assert!(table.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_table(&dir.path().join("absent.csv")).expect_err("missing file");
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn ragged_rows_are_rejected() {
    let err = load_table_from_reader("a,b\n1,2,3\n".as_bytes()).expect_err("ragged");
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn quoted_fields_follow_csv_rules() {
    let table = load_table_from_reader("name,qty\n\"Bolt, large\",2\n".as_bytes())
        .expect("load csv");
    assert_eq!(table.cell(0, "name"), Some(&CellValue::text("Bolt, large")));
}

#[test]
fn numeric_columns_remember_integer_or_float_origin() {
    let table = load_table_from_reader("id,price,qty,total\n1,7.0,3,\n2,8.5,4,5\n".as_bytes())
        .expect("load csv");

    assert_eq!(table.cell(0, "price"), Some(&CellValue::Number(7.0)));
    assert_eq!(
        table.number_formats(),
        &[
            NumberFormat::Integer,
            NumberFormat::Float,
            NumberFormat::Integer,
            NumberFormat::Float,
        ]
    );
}
