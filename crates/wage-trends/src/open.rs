//! Opening spreadsheets by file extension

use std::path::Path;

use crate::error::{WageError, WageResult};
use wage_trends_core::Table;

#[cfg(feature = "csv")]
use wage_trends_csv::{CsvReadOptions, CsvReader};
#[cfg(feature = "xlsx")]
use wage_trends_xlsx::XlsxReader;

/// Read the data sheet of a spreadsheet file into a table.
///
/// The reader is picked from the file extension: `xlsx`/`xlsm` or `csv`.
pub fn open_table<P: AsRef<Path>>(path: P) -> WageResult<Table> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        #[cfg(feature = "xlsx")]
        Some("xlsx") | Some("xlsm") => Ok(XlsxReader::read_file(path)?),
        #[cfg(feature = "csv")]
        Some("csv") => Ok(CsvReader::read_file(path, &CsvReadOptions::default())?),
        _ => Err(WageError::UnsupportedFormat(path.to_path_buf())),
    }
}
