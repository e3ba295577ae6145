//! Prelude module - common imports for wage-trends users
//!
//! ```rust
//! use wage_trends::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    convert_batch,
    convert_file,
    open_table,
    AnalyzerOptions,
    // Core types
    CellValue,
    Dashboard,
    DashboardOptions,
    DatasetLoader,
    Direction,
    InflationTable,
    LoadOutcome,
    SurveyConfig,
    Table,
    TrendAnalyzer,
    TrendReport,
    TrendSummary,
    // Errors
    WageError,
    WageRecord,
    WageResult,
    YearlyDataset,
};
