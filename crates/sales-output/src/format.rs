//! Text rendering of cell values.

use std::borrow::Cow;

use sales_model::{CellValue, NumberFormat};

/// Text a missing cell takes when it is forced into a string column.
pub const MISSING_TEXT: &str = "nan";

/// Formats a number in shortest round-trip decimal form.
///
/// Integer columns write whole numbers bare (`3`), float columns keep one
/// fractional digit (`3.0`). `9.99` renders as `9.99` either way and
/// infinities render as `inf` and `-inf`.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Integer if value == 0.0 => "0".to_string(),
        NumberFormat::Float if value.is_finite() && value.fract() == 0.0 => format!("{value}.0"),
        NumberFormat::Integer | NumberFormat::Float => format!("{value}"),
    }
}

/// Renders a cell the way it appears in a written CSV field.
///
/// Missing cells become an empty field.
pub fn render_cell(cell: &CellValue, format: NumberFormat) -> Cow<'_, str> {
    match cell {
        CellValue::Text(value) => Cow::Borrowed(value.as_str()),
        CellValue::Number(value) => Cow::Owned(format_number(*value, format)),
        CellValue::Missing => Cow::Borrowed(""),
    }
}

/// Converts a cell to its string representation for a text column.
///
/// Unlike [`render_cell`], a missing cell becomes [`MISSING_TEXT`].
pub fn stringify_cell(cell: &CellValue, format: NumberFormat) -> String {
    match cell {
        CellValue::Text(value) => value.clone(),
        CellValue::Number(value) => format_number(*value, format),
        CellValue::Missing => MISSING_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_columns_drop_fraction() {
        assert_eq!(format_number(3.0, NumberFormat::Integer), "3");
        assert_eq!(format_number(10.0, NumberFormat::Integer), "10");
        assert_eq!(format_number(-0.0, NumberFormat::Integer), "0");
    }

    #[test]
    fn float_columns_keep_one_fractional_digit() {
        assert_eq!(format_number(25.0, NumberFormat::Float), "25.0");
        assert_eq!(format_number(-0.0, NumberFormat::Float), "-0.0");
        assert_eq!(format_number(9.99, NumberFormat::Float), "9.99");
        assert_eq!(format_number(0.1 + 0.2, NumberFormat::Float), "0.30000000000000004");
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(format_number(f64::INFINITY, NumberFormat::Float), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, NumberFormat::Float), "-inf");
    }

    #[test]
    fn missing_renders_empty_but_stringifies_to_nan() {
        assert_eq!(render_cell(&CellValue::Missing, NumberFormat::Float), "");
        assert_eq!(stringify_cell(&CellValue::Missing, NumberFormat::Float), "nan");
        assert_eq!(stringify_cell(&CellValue::Number(7.0), NumberFormat::Float), "7.0");
        assert_eq!(stringify_cell(&CellValue::Number(42.0), NumberFormat::Integer), "42");
        assert_eq!(render_cell(&CellValue::text(" a "), NumberFormat::Integer), " a ");
    }
}
