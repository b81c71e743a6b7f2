//! Column-name and text-cell normalization.

use std::collections::HashMap;

use tracing::{debug, info};

use sales_model::{CellValue, SchemaError, Table, is_text_column};
use sales_output::stringify_cell;

/// Canonical form of a column name.
///
/// Strips surrounding whitespace, lowercases, then turns every space and
/// every hyphen into an underscore. Applying it twice changes nothing.
///
/// ```
/// use sales_transform::normalize_column_name;
///
/// assert_eq!(normalize_column_name(" Unit Price "), "unit_price");
/// assert_eq!(normalize_column_name("Order-ID"), "order_id");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_").replace('-', "_")
}

/// Renames every column to its canonical form and trims the designated text
/// columns.
///
/// Cells of `product_name` and `category` are converted to text first, so a
/// numeric code becomes its rendered form (`7`, or `7.0` in a float column)
/// and a missing cell becomes `nan`.
///
/// # Errors
///
/// Returns [`SchemaError::ColumnCollision`] when two input columns share a
/// canonical name.
pub fn normalize_schema(table: &Table) -> Result<Table, SchemaError> {
    let columns = normalize_column_names(table.columns())?;
    let mut out = table.clone().with_columns(columns)?;

    let text_indices: Vec<usize> = out
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| is_text_column(name))
        .map(|(idx, _)| idx)
        .collect();
    for idx in text_indices {
        let format = out.number_format(idx);
        out.map_column(idx, |cell| {
            CellValue::Text(stringify_cell(cell, format).trim().to_string())
        });
    }

    info!(columns = ?out.columns(), "normalized schema");
    Ok(out)
}

fn normalize_column_names(raw: &[String]) -> Result<Vec<String>, SchemaError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());
    for original in raw {
        let normalized = normalize_column_name(original);
        if let Some(first) = seen.get(&normalized) {
            return Err(SchemaError::ColumnCollision {
                normalized,
                first: (*first).to_string(),
                second: original.clone(),
            });
        }
        if normalized != *original {
            debug!(from = %original, to = %normalized, "renamed column");
        }
        seen.insert(normalized.clone(), original.as_str());
        names.push(normalized);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_before_replacing_separators() {
        assert_eq!(normalize_column_name(" Unit Price "), "unit_price");
        assert_eq!(normalize_column_name("\tQty\n"), "qty");
        assert_eq!(normalize_column_name("Product  Name"), "product__name");
        assert_eq!(normalize_column_name("e-mail Address"), "e_mail_address");
    }

    #[test]
    fn leaves_other_characters_alone() {
        assert_eq!(normalize_column_name("Price ($)"), "price_($)");
        assert_eq!(normalize_column_name("tab\there"), "tab\there");
    }

    #[test]
    fn collision_names_both_inputs() {
        let err = normalize_column_names(&["Category".to_string(), "category ".to_string()])
            .expect_err("collision");
        assert_eq!(
            err,
            SchemaError::ColumnCollision {
                normalized: "category".to_string(),
                first: "Category".to_string(),
                second: "category ".to_string(),
            }
        );
    }
}
