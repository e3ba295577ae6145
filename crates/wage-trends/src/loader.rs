//! Loading survey years with a read-through cache

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::{wage_file_stem, SurveyConfig, INFLATION_STEM};
use crate::convert::{normalize_table, table_to_records, year_from_filename};
use crate::error::{WageError, WageResult};
use crate::open::open_table;
use wage_trends_core::{
    InflationTable, WageRecord, YearlyDataset, AREA_TITLE, A_MEAN, OCC_TITLE, TOT_EMP, YEAR,
};

/// Occupation group columns; older survey years use `OCC_GROUP`
const GROUP_COLUMNS: [&str; 2] = ["O_GROUP", "OCC_GROUP"];

/// Read a number from a JSON field; numeric strings are accepted
fn number_field(record: &Map<String, Value>, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Build a wage record from one JSON object.
///
/// Returns `None` when the region or occupation is missing. A record without
/// a usable `YEAR` gets `default_year`.
pub fn record_from_json(record: &Map<String, Value>, default_year: i32) -> Option<WageRecord> {
    let area_title = string_field(record, AREA_TITLE)?;
    let occupation_title = string_field(record, OCC_TITLE)?;

    let year = number_field(record, YEAR)
        .filter(|y| y.fract() == 0.0)
        .map_or(default_year, |y| y as i32);

    Some(WageRecord {
        area_title,
        occupation_title,
        occupation_group: GROUP_COLUMNS
            .iter()
            .find_map(|key| string_field(record, key)),
        total_employment: number_field(record, TOT_EMP),
        mean_annual_wage: number_field(record, A_MEAN),
        year,
    })
}

/// Read a JSON array of record objects
fn read_json_records(path: &Path) -> WageResult<Vec<Map<String, Value>>> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;

    let Value::Array(items) = value else {
        return Err(WageError::InvalidData {
            path: path.to_path_buf(),
            message: "expected a JSON array of records".into(),
        });
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

/// Read a raw spreadsheet and normalize it like the converter does
fn read_spreadsheet_records(path: &Path) -> WageResult<Vec<Map<String, Value>>> {
    let mut table = open_table(path)?;
    normalize_table(&mut table, year_from_filename(path));
    Ok(table_to_records(&table))
}

/// A survey year that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub year: i32,
    pub message: String,
}

/// Result of loading several years: whatever loaded plus what didn't
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub datasets: Vec<Arc<YearlyDataset>>,
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    /// All records of all loaded years
    pub fn records(&self) -> impl Iterator<Item = &WageRecord> {
        self.datasets.iter().flat_map(|d| d.records.iter())
    }

    /// Years that loaded
    pub fn years(&self) -> Vec<i32> {
        self.datasets.iter().map(|d| d.year).collect()
    }
}

/// Loads survey years from converted JSON (falling back to the raw
/// spreadsheet) and keeps each parsed year in memory.
///
/// Inputs are immutable files, so a cached year never goes stale during the
/// loader's lifetime.
pub struct DatasetLoader {
    config: SurveyConfig,
    cache: HashMap<i32, Arc<YearlyDataset>>,
}

impl DatasetLoader {
    /// Create a loader with an empty cache
    pub fn new(config: SurveyConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
        }
    }

    /// The config this loader reads from
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Years currently cached, oldest first
    pub fn cached_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.cache.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Load one survey year, reading it from disk on first use
    pub fn load_year(&mut self, year: i32) -> WageResult<Arc<YearlyDataset>> {
        if let Some(dataset) = self.cache.get(&year) {
            log::debug!("Using cached data for {}", year);
            return Ok(Arc::clone(dataset));
        }

        let json_path = self.config.wage_output(year);
        let raw = if json_path.is_file() {
            read_json_records(&json_path)?
        } else if let Some(sheet) = self.config.find_spreadsheet(&wage_file_stem(year)) {
            log::debug!("{} not converted yet, reading {}", year, sheet.display());
            read_spreadsheet_records(&sheet)?
        } else {
            return Err(WageError::NotFound(format!("survey year {}", year)));
        };

        let total = raw.len();
        let records: Vec<WageRecord> = raw
            .iter()
            .filter_map(|record| record_from_json(record, year))
            .collect();
        if records.len() < total {
            log::debug!(
                "{}: skipped {} records without region or occupation",
                year,
                total - records.len()
            );
        }
        log::info!("Loaded {} records for {}", records.len(), year);

        let dataset = Arc::new(YearlyDataset::new(year, records));
        self.cache.insert(year, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Load several years; failures are collected rather than returned
    pub fn load_years(&mut self, years: impl IntoIterator<Item = i32>) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();
        for year in years {
            match self.load_year(year) {
                Ok(dataset) => outcome.datasets.push(dataset),
                Err(e) => {
                    log::warn!("Error loading data for year {}: {}", year, e);
                    outcome.failures.push(LoadFailure {
                        year,
                        message: e.to_string(),
                    });
                }
            }
        }
        outcome
    }

    /// Load every year of the configured range
    pub fn load_all(&mut self) -> LoadOutcome {
        let years = self.config.years();
        self.load_years(years)
    }

    /// Load the optional inflation table.
    ///
    /// Any problem is logged and yields `None`; charts then show nominal
    /// wages.
    pub fn load_inflation(&self) -> Option<InflationTable> {
        match self.read_inflation() {
            Ok(Some(table)) => Some(table),
            Ok(None) => {
                log::debug!("No inflation data found");
                None
            }
            Err(e) => {
                log::warn!("Error loading inflation data: {}", e);
                None
            }
        }
    }

    fn read_inflation(&self) -> WageResult<Option<InflationTable>> {
        let json_path = self.config.inflation_output();
        let raw = if json_path.is_file() {
            read_json_records(&json_path)?
        } else if let Some(sheet) = self.config.find_spreadsheet(INFLATION_STEM) {
            read_spreadsheet_records(&sheet)?
        } else {
            return Ok(None);
        };
        Ok(Some(inflation_from_records(&raw)))
    }
}

/// Look up a field by case-insensitive key
fn field_ci<'a>(record: &'a Map<String, Value>, key: &str) -> Option<(&'a String, &'a Value)> {
    record.iter().find(|(k, _)| k.eq_ignore_ascii_case(key))
}

/// Build an inflation table from `Year`/`Inflation` records (any key case)
pub fn inflation_from_records(records: &[Map<String, Value>]) -> InflationTable {
    records
        .iter()
        .filter_map(|record| {
            let (year_key, _) = field_ci(record, "year")?;
            let (factor_key, _) = field_ci(record, "inflation")?;
            let year = number_field(record, year_key)?;
            let factor = number_field(record, factor_key).filter(|f| *f > 0.0)?;
            Some((year as i32, factor))
        })
        .collect()
}
