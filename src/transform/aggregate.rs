//! Grouped mean aggregation.

use std::collections::BTreeMap;

use crate::error::{TransformError, TransformResult};
use crate::table::{Cell, Column, ColumnKind, Table};

/// Running sum/count for one group.
#[derive(Debug, Default, Clone, Copy)]
struct GroupAcc {
    sum: f64,
    count: usize,
    rows: usize,
}

/// Group rows by the distinct values of `key` and compute the mean of
/// `measure` per group.
///
/// The result is a two-column table: the key column followed by the mean
/// column, one row per distinct key. Keys are sorted ascending so output
/// is deterministic; rows whose key cell is missing form their own group,
/// emitted first with an empty key field. A group whose measure cells are
/// all missing yields a missing mean rather than an error.
///
/// Both columns must exist in the input; a missing column is a fatal
/// configuration error.
pub fn group_mean(table: &Table, key: &str, measure: &str) -> TransformResult<Table> {
    let key_col = table
        .column(key)
        .ok_or_else(|| TransformError::ColumnNotFound(key.to_string()))?;
    let measure_col = table
        .column(measure)
        .ok_or_else(|| TransformError::ColumnNotFound(measure.to_string()))?;

    // BTreeMap gives sorted keys; None (missing key) sorts first.
    let mut groups: BTreeMap<Option<String>, GroupAcc> = BTreeMap::new();

    for (key_cell, measure_cell) in key_col.cells.iter().zip(&measure_col.cells) {
        let group = match key_cell {
            Cell::Missing => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
        };
        let acc = groups.entry(group).or_default();
        acc.rows += 1;
        if let Some(n) = measure_cell.as_number() {
            acc.sum += n;
            acc.count += 1;
        }
    }

    let mut key_cells = Vec::with_capacity(groups.len());
    let mut mean_cells = Vec::with_capacity(groups.len());
    for (group, acc) in groups {
        key_cells.push(match group {
            Some(s) => Cell::Text(s),
            None => Cell::Missing,
        });
        mean_cells.push(if acc.count == 0 {
            Cell::Missing
        } else {
            Cell::Number(acc.sum / acc.count as f64)
        });
    }

    Ok(Table::from_columns(vec![
        Column {
            name: key.to_string(),
            kind: ColumnKind::Categorical,
            cells: key_cells,
        },
        Column {
            name: measure.to_string(),
            kind: ColumnKind::Numeric,
            cells: mean_cells,
        },
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_rows(raw(headers), rows.iter().map(|r| raw(r)).collect()).unwrap()
    }

    #[test]
    fn test_one_row_per_distinct_key() {
        let t = table(
            &["Zone", "Price"],
            &[&["A", "100"], &["A", "150"], &["B", "200"]],
        );
        let grouped = group_mean(&t, "Zone", "Price").unwrap();

        assert_eq!(grouped.n_rows(), 2);
        assert_eq!(grouped.headers(), vec!["Zone", "Price"]);
        assert_eq!(grouped.column("Zone").unwrap().cells[0], Cell::Text("A".into()));
        assert_eq!(grouped.column("Price").unwrap().cells[0], Cell::Number(125.0));
        assert_eq!(grouped.column("Price").unwrap().cells[1], Cell::Number(200.0));
    }

    #[test]
    fn test_keys_sorted() {
        let t = table(
            &["Zone", "Price"],
            &[&["C", "1"], &["A", "2"], &["B", "3"]],
        );
        let grouped = group_mean(&t, "Zone", "Price").unwrap();

        let keys: Vec<_> = grouped
            .column("Zone")
            .unwrap()
            .cells
            .iter()
            .map(Cell::render)
            .collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_key_forms_own_group() {
        let t = table(
            &["Zone", "Price"],
            &[&["A", "100"], &["", "50"], &["", "150"]],
        );
        let grouped = group_mean(&t, "Zone", "Price").unwrap();

        assert_eq!(grouped.n_rows(), 2);
        // Missing-key group first, key rendered as an empty field.
        assert_eq!(grouped.column("Zone").unwrap().cells[0], Cell::Missing);
        assert_eq!(grouped.column("Price").unwrap().cells[0], Cell::Number(100.0));
    }

    #[test]
    fn test_group_with_no_numbers_yields_missing_mean() {
        // Price is entirely missing, so nothing was imputed upstream either.
        let t = table(&["Zone", "Price"], &[&["A", ""], &["A", ""], &["A", ""]]);
        let grouped = group_mean(&t, "Zone", "Price").unwrap();

        assert_eq!(grouped.n_rows(), 1);
        assert_eq!(grouped.column("Price").unwrap().cells[0], Cell::Missing);
    }

    #[test]
    fn test_missing_key_column_is_fatal() {
        let t = table(&["Zone", "Price"], &[&["A", "1"]]);
        let err = group_mean(&t, "Neighborhood", "Price").unwrap_err();
        assert!(err.to_string().contains("Neighborhood"));
    }

    #[test]
    fn test_missing_measure_column_is_fatal() {
        let t = table(&["Zone", "Price"], &[&["A", "1"]]);
        let err = group_mean(&t, "Zone", "Final_Sale_Price").unwrap_err();
        assert!(err.to_string().contains("Final_Sale_Price"));
    }

    #[test]
    fn test_group_sizes_cover_all_rows() {
        let t = table(
            &["Zone", "Price"],
            &[&["A", "1"], &["B", "2"], &["", "3"], &["A", "4"]],
        );
        let grouped = group_mean(&t, "Zone", "Price").unwrap();
        // 3 groups (A, B, missing) covering all 4 input rows.
        assert_eq!(grouped.n_rows(), 3);
    }
}
