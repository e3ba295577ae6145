//! Error types for the wage-trends pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations
pub type WageResult<T> = std::result::Result<T, WageError>;

/// Errors that can occur while converting, loading or rendering survey data
#[derive(Debug, Error)]
pub enum WageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XLSX error
    #[cfg(feature = "xlsx")]
    #[error("XLSX error: {0}")]
    Xlsx(#[from] wage_trends_xlsx::XlsxError),

    /// CSV error
    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] wage_trends_csv::CsvError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] wage_trends_core::Error),

    /// Chart error
    #[error("Chart error: {0}")]
    Chart(#[from] wage_trends_chart::ChartError),

    /// File extension not handled by any reader
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// No input file exists for a dataset
    #[error("No data file found for {0}")]
    NotFound(String),

    /// Data that parsed but doesn't have the expected shape
    #[error("Invalid data in {}: {message}", path.display())]
    InvalidData { path: PathBuf, message: String },
}
