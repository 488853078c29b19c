//! In-memory table model for the csvetl pipeline.
//!
//! This module contains the core data structures handed from stage to stage:
//!
//! - [`Cell`] - a single value: number, text, or missing
//! - [`Column`] - a named, homogeneously-typed sequence of cells
//! - [`Table`] - an ordered collection of equal-length columns
//!
//! Column types are inferred, not declared: a column is numeric when it has
//! at least one non-missing cell and every non-missing cell parses as a
//! float. Everything else is categorical, and categorical cells keep their
//! raw text so they survive the pipeline unchanged.

use serde_json::{json, Map, Value};

use crate::error::{ExtractError, ExtractResult, TransformError, TransformResult};

// =============================================================================
// Cell
// =============================================================================

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A numeric value.
    Number(f64),
    /// A raw text value.
    Text(String),
    /// A missing value (empty field in the source file).
    Missing,
}

impl Cell {
    /// True if the cell holds no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Numeric view of the cell, if it holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Render the cell the way it is written to CSV.
    /// Missing renders as an empty field.
    pub fn render(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Missing => String::new(),
        }
    }

    /// JSON view of the cell, for diagnostic dumps.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Text(s) => json!(s),
            Cell::Missing => Value::Null,
        }
    }
}

// =============================================================================
// Column
// =============================================================================

/// Inferred logical type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-missing cell is a number (and there is at least one).
    Numeric,
    /// Anything else, including entirely-missing columns.
    Categorical,
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within its table.
    pub name: String,
    /// Inferred type.
    pub kind: ColumnKind,
    /// Cell values, one per row.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Build a column from raw string fields, inferring its type.
    ///
    /// Inference is column-level, not cell-level: if any non-missing field
    /// fails to parse as a float the whole column stays categorical and
    /// every field keeps its raw text.
    pub fn from_raw(name: impl Into<String>, raw: Vec<String>) -> Self {
        let parsed: Vec<Option<f64>> = raw
            .iter()
            .map(|s| {
                if s.is_empty() {
                    None
                } else {
                    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
                }
            })
            .collect();

        let non_missing = raw.iter().filter(|s| !s.is_empty()).count();
        let numeric = non_missing > 0
            && raw
                .iter()
                .zip(&parsed)
                .all(|(s, p)| s.is_empty() || p.is_some());

        let cells = if numeric {
            parsed
                .into_iter()
                .map(|p| p.map(Cell::Number).unwrap_or(Cell::Missing))
                .collect()
        } else {
            raw.into_iter()
                .map(|s| {
                    if s.is_empty() {
                        Cell::Missing
                    } else {
                        Cell::Text(s)
                    }
                })
                .collect()
        };

        Self {
            name: name.into(),
            kind: if numeric {
                ColumnKind::Numeric
            } else {
                ColumnKind::Categorical
            },
            cells,
        }
    }

    /// Arithmetic mean of the non-missing numeric cells.
    ///
    /// `None` when the column has no numeric cells at all (an
    /// entirely-missing column has no defined mean).
    pub fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for cell in &self.cells {
            if let Some(n) = cell.as_number() {
                sum += n;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }
}

// =============================================================================
// Table
// =============================================================================

/// An ordered collection of named, equal-length columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from headers and raw row fields.
    ///
    /// Rows shorter than the header are padded with missing cells; extra
    /// cells beyond the header are ignored. Duplicate headers are rejected
    /// since column names key every later lookup.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> ExtractResult<Self> {
        for (i, name) in headers.iter().enumerate() {
            if headers[..i].contains(name) {
                return Err(ExtractError::DuplicateHeader(name.clone()));
            }
        }

        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(col_idx, name)| {
                let raw: Vec<String> = rows
                    .iter()
                    .map(|row| row.get(col_idx).cloned().unwrap_or_default())
                    .collect();
                Column::from_raw(name, raw)
            })
            .collect();

        Ok(Self { columns })
    }

    /// Build a table directly from columns.
    ///
    /// Used by the aggregation step, which produces its output columns
    /// already typed. Callers must pass equal-length, uniquely-named
    /// columns.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        debug_assert!(columns
            .windows(2)
            .all(|w| w[0].cells.len() == w[1].cells.len()));
        Self { columns }
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names, in table order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All columns, in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to all columns, for in-place imputation.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Rename a column. Pure name substitution: cells and row order are
    /// untouched. Fails if the source column does not exist.
    pub fn rename_column(&mut self, from: &str, to: &str) -> TransformResult<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == from)
            .ok_or_else(|| TransformError::ColumnNotFound(from.to_string()))?;
        column.name = to.to_string();
        Ok(())
    }

    /// Render the first `n` rows as an aligned text block.
    pub fn head(&self, n: usize) -> String {
        self.render_rows(0..self.n_rows().min(n))
    }

    /// Render the last `n` rows as an aligned text block.
    pub fn tail(&self, n: usize) -> String {
        let total = self.n_rows();
        self.render_rows(total.saturating_sub(n)..total)
    }

    /// Render the whole table as an aligned text block.
    pub fn render(&self) -> String {
        self.render_rows(0..self.n_rows())
    }

    fn render_rows(&self, range: std::ops::Range<usize>) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.len()).collect();
        for (i, col) in self.columns.iter().enumerate() {
            for row in range.clone() {
                widths[i] = widths[i].max(col.cells[row].render().len());
            }
        }

        let mut out = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:>width$}", col.name, width = widths[i]));
        }
        out.push('\n');
        for row in range {
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    out.push_str("  ");
                }
                out.push_str(&format!(
                    "{:>width$}",
                    col.cells[row].render(),
                    width = widths[i]
                ));
            }
            out.push('\n');
        }
        out
    }

    /// Export rows as JSON objects keyed by column name, for the
    /// `preview` command. Missing cells become `null`.
    pub fn to_json_rows(&self) -> Vec<Value> {
        (0..self.n_rows())
            .map(|row| {
                let mut obj = Map::new();
                for col in &self.columns {
                    obj.insert(col.name.clone(), col.cells[row].to_json());
                }
                Value::Object(obj)
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
