//! Spreadsheet to JSON conversion
//!
//! A survey sheet is normalized before it is written out:
//! column names are uppercased, `STATE` becomes `AREA_TITLE`, the numeric
//! survey columns are coerced (suppressed values such as `*` or `#` become
//! `null`) and the survey year from the file name is added as `YEAR`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::config::{wage_file_stem, SurveyConfig, INFLATION_STEM};
use crate::error::WageResult;
use crate::open::open_table;
use wage_trends_core::{CellValue, Table, NUMERIC_COLUMNS, YEAR};

static YEAR_IN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)(\d{4})(?:\D|$)").expect("valid year regex"));

/// Survey year encoded in a file name such as `state_M2019_dl.xlsx`.
///
/// Uses the first run of exactly four digits in the file stem; runs outside
/// 1900..=2100 are not treated as years.
pub fn year_from_filename<P: AsRef<Path>>(path: P) -> Option<i32> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let digits = YEAR_IN_NAME.captures(stem)?.get(1)?;
    digits
        .as_str()
        .parse::<i32>()
        .ok()
        .filter(|year| (1900..=2100).contains(year))
}

/// Apply the survey normalization to a freshly read table.
///
/// Returns the number of numeric cells that were nulled.
pub fn normalize_table(table: &mut Table, year: Option<i32>) -> usize {
    table.normalize_columns();

    let nulled = NUMERIC_COLUMNS
        .iter()
        .map(|column| table.coerce_numeric(column))
        .sum();

    if let Some(year) = year {
        table.set_column(YEAR, year);
    }
    nulled
}

/// Convert one cell to JSON
fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::Null,
        CellValue::Boolean(b) => Value::Bool(*b),
        CellValue::String(s) => Value::String(s.clone()),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 9.0e15 {
                Value::Number(Number::from(*n as i64))
            } else {
                Number::from_f64(*n).map_or(Value::Null, Value::Number)
            }
        }
    }
}

/// One JSON object per row, keys in column order
pub fn table_to_records(table: &Table) -> Vec<Map<String, Value>> {
    table
        .rows()
        .iter()
        .map(|row| {
            table
                .columns()
                .iter()
                .zip(row)
                .map(|(column, value)| (column.clone(), cell_to_json(value)))
                .collect()
        })
        .collect()
}

/// Serialize a table as a JSON array of records
pub fn table_to_json(table: &Table) -> Value {
    Value::Array(
        table_to_records(table)
            .into_iter()
            .map(Value::Object)
            .collect(),
    )
}

/// Outcome of converting one spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Records written (equals the number of data rows read)
    pub records: usize,
    /// Year added as `YEAR`, if the file name carried one
    pub year: Option<i32>,
    /// Numeric cells that didn't parse and were written as `null`
    pub nulled: usize,
}

/// Convert a spreadsheet to a JSON array file.
///
/// Creates the output's parent directory when needed.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> WageResult<ConvertReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut table = open_table(input)?;
    let year = year_from_filename(input);
    let nulled = normalize_table(&mut table, year);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer(&mut writer, &table_to_json(&table))?;
    writer.flush()?;

    log::info!("Converted {} to {}", input.display(), output.display());

    Ok(ConvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: table.row_count(),
        year,
        nulled,
    })
}

/// Outcome of a batch conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub converted: Vec<ConvertReport>,
    /// Expected inputs that don't exist
    pub skipped: Vec<PathBuf>,
    /// Inputs that exist but failed to convert, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Total records written across all converted files
    pub fn total_records(&self) -> usize {
        self.converted.iter().map(|r| r.records).sum()
    }
}

/// Convert every survey year in the config, then the inflation table.
///
/// Missing inputs are skipped and conversion errors are recorded; neither
/// stops the batch. Only a failure to create the output directory is
/// returned as an error.
pub fn convert_batch(config: &SurveyConfig) -> WageResult<BatchReport> {
    fs::create_dir_all(&config.output_dir)?;

    let mut report = BatchReport::default();

    let jobs = config
        .years()
        .map(|year| (wage_file_stem(year), config.wage_input(year)))
        .chain(std::iter::once((
            INFLATION_STEM.to_string(),
            config.data_dir.join(format!("{}.xlsx", INFLATION_STEM)),
        )));

    for (stem, expected) in jobs {
        let Some(input) = config.find_spreadsheet(&stem) else {
            log::warn!("Skipping {}: file not found", expected.display());
            report.skipped.push(expected);
            continue;
        };

        let output = config.output_dir.join(format!("{}.json", stem));
        match convert_file(&input, &output) {
            Ok(converted) => report.converted.push(converted),
            Err(e) => {
                log::warn!("Failed to convert {}: {}", input.display(), e);
                report.failed.push((input, e.to_string()));
            }
        }
    }

    Ok(report)
}
