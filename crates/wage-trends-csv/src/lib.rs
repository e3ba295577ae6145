//! # wage-trends-csv
//!
//! CSV reader for wage-trends. Survey extracts are sometimes published as
//! CSV instead of XLSX; both read into the same [`wage_trends_core::Table`].

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
