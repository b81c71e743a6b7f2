use std::io::Read;

use csv::ReaderBuilder;

use sales_model::LoadError;

/// Raw CSV contents before any type inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Reads a header line followed by data lines, all of the same width.
///
/// # Errors
///
/// Returns [`LoadError::Csv`] for ragged rows or invalid UTF-8,
/// [`LoadError::Empty`] when there is no header line and
/// [`LoadError::DuplicateHeader`] when a header name repeats.
pub fn read_csv_table<R: Read>(reader: R) -> Result<CsvTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    check_unique_headers(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { headers, rows })
}

fn check_unique_headers(headers: &[String]) -> Result<(), LoadError> {
    for (second, name) in headers.iter().enumerate() {
        if let Some(first) = headers[..second].iter().position(|h| h == name) {
            return Err(LoadError::DuplicateHeader {
                name: name.clone(),
                first,
                second,
            });
        }
    }
    Ok(())
}
