//! Chart error types

use thiserror::Error;

/// Result type for chart operations
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while rendering charts
#[derive(Debug, Error)]
pub enum ChartError {
    /// A sparkline needs at least two points to draw a line
    #[error("Series '{0}' has fewer than two points")]
    NotEnoughPoints(String),

    /// Drawing backend failure
    #[error("Render error: {0}")]
    Render(String),
}
