//! Number parsing and the per-column number format.

use serde::{Deserialize, Serialize};

use crate::CellValue;

/// Parses a string as f64, ignoring surrounding whitespace.
///
/// Returns `None` for blank or non-numeric text and for text spelling NaN.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Whether `value` is written as a whole number (`42`, `-5`, ` +3 `).
pub fn is_integer_literal(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// How the numbers of one column are written.
///
/// A column starts as [`NumberFormat::Integer`] and widens to
/// [`NumberFormat::Float`] once it holds a missing value, a fractional or
/// non-finite number, or was read from decimal text such as `7.0`. It never
/// narrows back, so dropping rows keeps the format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// `3`
    #[default]
    Integer,
    /// `3.0`
    Float,
}

impl NumberFormat {
    /// The format a column needs once it also holds `cell`.
    #[must_use]
    pub fn widen(self, cell: &CellValue) -> Self {
        match cell {
            CellValue::Missing => Self::Float,
            CellValue::Number(value) if value.fract() != 0.0 || !value.is_finite() => Self::Float,
            CellValue::Number(_) | CellValue::Text(_) => self,
        }
    }
}
