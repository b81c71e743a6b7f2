//! Per-column type inference for loaded CSV data.
//!
//! A column is numeric when every non-missing cell parses as a number.
//! Anything else keeps its raw text.

use sales_model::{CellValue, parse_f64};

/// Raw cell texts read as a missing value.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Inferred storage kind of a loaded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

pub fn is_na_token(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

/// Decides the kind of one column from its raw cells.
pub fn infer_column_kind<'a>(cells: impl IntoIterator<Item = &'a str>) -> ColumnKind {
    let all_numeric = cells
        .into_iter()
        .filter(|raw| !is_na_token(raw))
        .all(|raw| parse_f64(raw).is_some());
    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

/// Converts one raw cell according to its column kind.
pub fn convert_cell(raw: &str, kind: ColumnKind) -> CellValue {
    if is_na_token(raw) {
        return CellValue::Missing;
    }
    match kind {
        ColumnKind::Numeric => parse_f64(raw).map_or(CellValue::Missing, CellValue::Number),
        ColumnKind::Text => CellValue::Text(raw.to_string()),
    }
}
