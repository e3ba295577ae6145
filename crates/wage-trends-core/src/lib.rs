//! # wage-trends-core
//!
//! Core data structures for the wage-trends survey pipeline.
//!
//! This crate provides the fundamental types used throughout wage-trends:
//! - [`CellValue`] and [`CellAddress`] - Values and positions read from a sheet
//! - [`Table`] - A header row plus data rows, with the column normalization
//!   applied to survey files
//! - [`WageRecord`], [`YearlyDataset`] - Parsed survey rows
//! - [`TrendSummary`] - Per-occupation wage trend derived from several years
//!
//! ## Example
//!
//! ```rust
//! use wage_trends_core::{CellValue, Table};
//!
//! let mut table = Table::new(["state", "a_mean"]);
//! table.push_row(vec!["Wisconsin".into(), "*".into()]).unwrap();
//!
//! table.normalize_columns();
//! table.coerce_numeric("A_MEAN");
//!
//! assert_eq!(table.columns(), &["AREA_TITLE", "A_MEAN"]);
//! assert_eq!(table.get(0, "A_MEAN"), Some(&CellValue::Empty));
//! ```

pub mod cell;
pub mod error;
pub mod record;
pub mod table;

pub use cell::{CellAddress, CellValue, MAX_COLS};
pub use error::{Error, Result};
pub use record::{Direction, InflationTable, TrendSummary, WageRecord, YearPoint, YearlyDataset};
pub use table::{Table, AREA_TITLE, STATE, YEAR};

/// Mean annual wage column
pub const A_MEAN: &str = "A_MEAN";

/// Total employment column
pub const TOT_EMP: &str = "TOT_EMP";

/// Occupation title column
pub const OCC_TITLE: &str = "OCC_TITLE";

/// Columns coerced to numbers when converting a survey file
pub const NUMERIC_COLUMNS: [&str; 2] = [TOT_EMP, A_MEAN];
