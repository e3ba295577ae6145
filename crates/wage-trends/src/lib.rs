//! # wage-trends
//!
//! Converts state wage-survey spreadsheets to JSON and charts how mean wages
//! of individual occupations moved across survey years.
//!
//! The pipeline runs one way:
//!
//! - [`convert`] - normalize raw spreadsheets and write them as JSON
//! - [`loader`] - read converted years back, with a per-year cache
//! - [`analyze`] - per-occupation trends for one region
//! - [`dashboard`] - an HTML page of sparklines for the selected trends
//!
//! ## Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wage_trends::prelude::*;
//!
//! let records: Vec<WageRecord> = [(2019, 100.0), (2020, 110.0), (2022, 130.0)]
//!     .into_iter()
//!     .map(|(year, wage)| WageRecord {
//!         area_title: "Wisconsin".into(),
//!         occupation_title: "Registered Nurses".into(),
//!         occupation_group: Some("detailed".into()),
//!         total_employment: None,
//!         mean_annual_wage: Some(wage),
//!         year,
//!     })
//!     .collect();
//!
//! let analyzer = TrendAnalyzer::new(AnalyzerOptions::for_region("Wisconsin"));
//! let trends = analyzer.analyze(&records, &mut StdRng::seed_from_u64(1));
//!
//! assert_eq!(trends.len(), 1);
//! assert_eq!(trends[0].caption(), "+30.0% (2019-2022)");
//! ```

pub mod analyze;
pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod open;
pub mod prelude;

pub use analyze::{percent_change, AnalyzerOptions, TrendAnalyzer, TrendReport};
pub use config::{wage_file_stem, SurveyConfig};
pub use convert::{
    convert_batch, convert_file, normalize_table, table_to_json, table_to_records,
    year_from_filename, BatchReport, ConvertReport,
};
pub use dashboard::{Dashboard, DashboardOptions};
pub use error::{WageError, WageResult};
pub use loader::{DatasetLoader, LoadFailure, LoadOutcome};
pub use open::open_table;

// Re-export core types
pub use wage_trends_core::{
    CellAddress, CellValue, Direction, InflationTable, Table, TrendSummary, WageRecord,
    YearPoint, YearlyDataset,
};

// Re-export chart types
pub use wage_trends_chart::{GridLayout, LineColor, Sparkline, SparklineRenderer};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use wage_trends_csv::{CsvReadOptions, CsvReader};
#[cfg(feature = "xlsx")]
pub use wage_trends_xlsx::XlsxReader;
