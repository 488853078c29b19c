//! Load stage: serialize a table to a CSV file.

use std::path::Path;

use crate::error::LoadResult;
use crate::table::Table;

/// Write a table to `path` as comma-separated text.
///
/// Header row first, then one line per data row. Missing cells are written
/// as empty fields and no row-index column is added. Any existing file at
/// the path is overwritten. Write failures propagate to the caller; nothing
/// is retried or cleaned up here.
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> LoadResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    writer.write_record(table.headers())?;
    for row in 0..table.n_rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|col| col.cells[row].render())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, Column, ColumnKind};

    fn grouped_result() -> Table {
        Table::from_columns(vec![
            Column {
                name: "MS Zoning".into(),
                kind: ColumnKind::Categorical,
                cells: vec![Cell::Text("A".into()), Cell::Text("B".into())],
            },
            Column {
                name: "Final_Sale_Price".into(),
                kind: ColumnKind::Numeric,
                cells: vec![Cell::Number(125.0), Cell::Number(200.0)],
            },
        ])
    }

    #[test]
    fn test_write_no_index_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_table(&grouped_result(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "MS Zoning,Final_Sale_Price\nA,125\nB,200\n");
    }

    #[test]
    fn test_missing_cell_written_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let table = Table::from_columns(vec![Column {
            name: "x".into(),
            kind: ColumnKind::Numeric,
            cells: vec![Cell::Missing, Cell::Number(1.0)],
        }]);
        write_table(&table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "x\n\"\"\n1\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "old contents").unwrap();

        write_table(&grouped_result(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old contents"));
        assert!(content.starts_with("MS Zoning"));
    }

    #[test]
    fn test_unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");

        assert!(write_table(&grouped_result(), &path).is_err());
    }
}
