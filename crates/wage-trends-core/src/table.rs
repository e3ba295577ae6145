//! Header-plus-rows tables read from a single worksheet

use crate::cell::CellValue;
use crate::error::{Error, Result};

/// Column name used for the region of a survey row
pub const AREA_TITLE: &str = "AREA_TITLE";

/// Legacy region column name used by some survey years
pub const STATE: &str = "STATE";

/// Column name used for the survey year
pub const YEAR: &str = "YEAR";

/// A rectangular table: one header row of column names plus data rows.
///
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Column names, in sheet order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows (header excluded)
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get a cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Append a data row, padding it with empty cells to the column count
    pub fn push_row(&mut self, mut row: Vec<CellValue>) -> Result<()> {
        if row.len() > self.columns.len() {
            return Err(Error::RowTooWide {
                row: self.rows.len(),
                len: row.len(),
                columns: self.columns.len(),
            });
        }
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
        Ok(())
    }

    /// Uppercase every column name and map `STATE` to `AREA_TITLE`.
    ///
    /// The rename is skipped when the sheet already has an `AREA_TITLE`
    /// column.
    pub fn normalize_columns(&mut self) {
        for name in &mut self.columns {
            *name = name.to_uppercase();
        }

        if self.column_index(AREA_TITLE).is_none() {
            if let Some(idx) = self.column_index(STATE) {
                self.columns[idx] = AREA_TITLE.to_string();
            }
        }
    }

    /// Coerce a column to numbers; values that don't parse become empty.
    ///
    /// Returns the number of cells that were nulled by the coercion. A
    /// missing column is a no-op.
    pub fn coerce_numeric(&mut self, column: &str) -> usize {
        let Some(col) = self.column_index(column) else {
            return 0;
        };

        let mut nulled = 0;
        for row in &mut self.rows {
            let coerced = row[col].to_numeric();
            if coerced.is_empty() && !row[col].is_empty() {
                nulled += 1;
            }
            row[col] = coerced;
        }
        nulled
    }

    /// Set a constant value for a column on every row, appending the column
    /// if it doesn't exist yet.
    pub fn set_column<V: Into<CellValue>>(&mut self, column: &str, value: V) {
        let value = value.into();
        match self.column_index(column) {
            Some(col) => {
                for row in &mut self.rows {
                    row[col] = value.clone();
                }
            }
            None => {
                self.columns.push(column.to_string());
                for row in &mut self.rows {
                    row.push(value.clone());
                }
            }
        }
    }
}
