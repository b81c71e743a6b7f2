use sales_model::{Table, is_numeric_candidate};

/// Candidate numeric columns present in `table`, in table column order.
///
/// Stages call this on their own input rather than sharing a set computed
/// earlier in the run.
pub fn active_numeric_columns(table: &Table) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter(|name| is_numeric_candidate(name))
        .cloned()
        .collect()
}

pub(crate) fn active_numeric_indices(table: &Table) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| is_numeric_candidate(name))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_candidates_with_present_columns() {
        let table = Table::new(vec![
            "total".to_string(),
            "product_name".to_string(),
            "qty".to_string(),
            "Price".to_string(),
        ]);
        assert_eq!(active_numeric_columns(&table), vec!["total", "qty"]);
        assert_eq!(active_numeric_indices(&table), vec![0, 2]);
    }

    #[test]
    fn empty_when_nothing_matches() {
        let table = Table::new(vec!["sku".to_string(), "region".to_string()]);
        assert!(active_numeric_columns(&table).is_empty());
    }
}
