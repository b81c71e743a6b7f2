//! CSV writer for cleaned tables.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use sales_model::{Table, WriteError};
use tracing::{debug, warn};

use crate::format::render_cell;

/// Writes `table` as CSV to `path`, creating parent directories as needed.
///
/// The data goes to a sibling `.csv.tmp` file first and is renamed over
/// `path` only once fully written, so a failed write never leaves a
/// truncated file behind.
///
/// # Errors
///
/// Returns [`WriteError`] if the file cannot be created, written or moved
/// into place.
pub fn write_table(table: &Table, path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_via_temp(path, |file| write_table_to_writer(table, file))?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote csv"
    );
    Ok(())
}

/// Writes `table` as CSV to any writer: a header line, then one line per row.
///
/// # Errors
///
/// Returns [`WriteError::Csv`] on encoding or I/O failure, including flush.
pub fn write_table_to_writer<W: Write>(table: &Table, writer: W) -> Result<(), WriteError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        csv_writer.write_record(
            row.iter()
                .zip(table.number_formats())
                .map(|(cell, format)| render_cell(cell, *format).into_owned()),
        )?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn write_via_temp<F>(path: &Path, write: F) -> Result<(), WriteError>
where
    F: FnOnce(&mut File) -> Result<(), WriteError>,
{
    let temp_path = path.with_extension("csv.tmp");
    let result = write_and_sync(&temp_path, write).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|source| WriteError::Rename {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source,
        })
    });
    if result.is_err()
        && temp_path.exists()
        && let Err(error) = fs::remove_file(&temp_path)
    {
        warn!(path = %temp_path.display(), %error, "could not remove partial output");
    }
    result
}

fn write_and_sync<F>(temp_path: &Path, write: F) -> Result<(), WriteError>
where
    F: FnOnce(&mut File) -> Result<(), WriteError>,
{
    let io_error = |source| WriteError::Io {
        path: temp_path.to_path_buf(),
        source,
    };
    let mut file = File::create(temp_path).map_err(io_error)?;
    write(&mut file)?;
    file.sync_all().map_err(io_error)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use sales_model::{CellValue, NumberFormat};

    fn sample() -> Table {
        Table::from_rows(
            vec!["product_name".into(), "unit_price".into(), "qty".into()],
            vec![
                vec![
                    CellValue::text("Widget"),
                    CellValue::Number(9.99),
                    CellValue::Number(3.0),
                ],
                vec![
                    CellValue::text("Bolt, large"),
                    CellValue::Number(0.5),
                    CellValue::Missing,
                ],
            ],
        )
        .expect("table")
    }

    #[test]
    fn writes_header_and_rendered_rows() {
        let mut out = Vec::new();
        write_table_to_writer(&sample(), &mut out).expect("write csv");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "product_name,unit_price,qty\nWidget,9.99,3.0\n\"Bolt, large\",0.5,\n"
        );
    }

    #[test]
    fn header_only_for_empty_table() {
        let table = Table::new(vec!["price".into()]);
        let mut out = Vec::new();
        write_table_to_writer(&table, &mut out).expect("write csv");
        assert_eq!(String::from_utf8(out).expect("utf8"), "price\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("clean.csv");
        write_table(&sample(), &path).expect("write file");
        let text = std::fs::read_to_string(&path).expect("read back");
        assert!(text.starts_with("product_name,unit_price,qty\n"));
    }

    #[test]
    fn integer_columns_are_written_without_fraction() {
        let table = Table::from_rows(
            vec!["order_id".into(), "total".into()],
            vec![vec![CellValue::Number(4.0), CellValue::Number(25.0)]],
        )
        .expect("table");
        let mut out = Vec::new();
        write_table_to_writer(&table, &mut out).expect("write csv");
        assert_eq!(table.number_format(1), NumberFormat::Integer);
        assert_eq!(String::from_utf8(out).expect("utf8"), "order_id,total\n4,25\n");
    }

    #[test]
    fn failed_write_keeps_previous_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("clean.csv");
        fs::write(&path, "old\n").expect("seed output");

        let err = write_via_temp(&path, |file| {
            file.write_all(b"order_id,qty\n1,").map_err(csv::Error::from)?;
            Err(WriteError::Csv(csv::Error::from(io::Error::other("disk full"))))
        })
        .expect_err("write fails");

        assert!(matches!(err, WriteError::Csv(_)));
        assert_eq!(fs::read_to_string(&path).expect("read back"), "old\n");
        assert!(!path.with_extension("csv.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("clean.csv");
        fs::create_dir(&path).expect("directory in the way");
        fs::write(path.join("keep"), "x").expect("fill directory");

        let err = write_table(&sample(), &path).expect_err("rename fails");

        assert!(matches!(err, WriteError::Rename { .. }));
        assert!(path.is_dir());
        assert!(!path.with_extension("csv.tmp").exists());
    }
}
