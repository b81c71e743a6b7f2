//! Fixed column sets recognised by the cleaning stages.
//!
//! Names are in their normalized form (lowercase, underscore separated), so
//! they only match after the schema normalizer has run.

/// Text columns whose cells are stringified and trimmed.
pub const TEXT_COLUMNS: [&str; 2] = ["product_name", "category"];

/// Candidate numeric columns, in no particular order.
pub const NUMERIC_CANDIDATES: [&str; 5] = ["price", "unit_price", "quantity", "qty", "total"];

pub fn is_text_column(name: &str) -> bool {
    TEXT_COLUMNS.contains(&name)
}

pub fn is_numeric_candidate(name: &str) -> bool {
    NUMERIC_CANDIDATES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_normalized_names() {
        assert!(is_numeric_candidate("unit_price"));
        assert!(!is_numeric_candidate("Unit Price"));
        assert!(!is_numeric_candidate("unit-price"));
        assert!(is_text_column("category"));
        assert!(!is_text_column("Category"));
    }
}
