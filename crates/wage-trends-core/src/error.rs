//! Error types for wage-trends-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wage-trends-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Row has more cells than the table has columns
    #[error("Row {row} has {len} cells but the table has {columns} columns")]
    RowTooWide {
        row: usize,
        len: usize,
        columns: usize,
    },
}
