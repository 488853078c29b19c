//! Mean imputation of missing numeric cells.

use crate::table::{Cell, ColumnKind, Table};

/// Diagnostics for one imputed column.
#[derive(Debug, Clone, PartialEq)]
pub struct ImputedColumn {
    /// Column name.
    pub name: String,
    /// Mean broadcast into the missing cells.
    pub mean: f64,
    /// Number of cells filled.
    pub filled: usize,
}

/// Fill every missing cell of every numeric column with that column's mean.
///
/// The mean is computed once per column over its non-missing cells, before
/// any fill, then broadcast to all missing cells of that column. Columns
/// behave independently.
///
/// Categorical columns are left untouched, missing cells included. An
/// entirely-missing numeric column has no defined mean and is also left
/// untouched; the missing values propagate downstream instead of raising.
///
/// Returns one [`ImputedColumn`] per column that actually had cells filled.
pub fn impute_numeric_means(table: &mut Table) -> Vec<ImputedColumn> {
    let mut imputed = Vec::new();

    for column in table.columns_mut() {
        if column.kind != ColumnKind::Numeric {
            continue;
        }
        let Some(mean) = column.mean() else {
            continue;
        };

        let mut filled = 0usize;
        for cell in &mut column.cells {
            if cell.is_missing() {
                *cell = Cell::Number(mean);
                filled += 1;
            }
        }

        if filled > 0 {
            imputed.push(ImputedColumn {
                name: column.name.clone(),
                mean,
                filled,
            });
        }
    }

    imputed
}
