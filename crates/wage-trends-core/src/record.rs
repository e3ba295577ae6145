//! Survey records and the summaries derived from them

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One occupation's wage statistics for one region and survey year
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WageRecord {
    /// Region name (`AREA_TITLE`)
    pub area_title: String,
    /// Occupation name (`OCC_TITLE`)
    pub occupation_title: String,
    /// Occupation level (`OCC_GROUP` or `O_GROUP`), e.g. `detailed`
    pub occupation_group: Option<String>,
    /// Total employment (`TOT_EMP`)
    pub total_employment: Option<f64>,
    /// Mean annual wage (`A_MEAN`)
    pub mean_annual_wage: Option<f64>,
    /// Survey year
    pub year: i32,
}

impl WageRecord {
    /// Whether this record is a detailed occupation.
    ///
    /// Records that carry no group at all are treated as detailed.
    pub fn is_detailed(&self) -> bool {
        self.occupation_group
            .as_deref()
            .map_or(true, |g| g.eq_ignore_ascii_case("detailed"))
    }
}

/// All records of one survey year, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyDataset {
    /// Survey year
    pub year: i32,
    /// Records in file order
    pub records: Vec<WageRecord>,
}

impl YearlyDataset {
    /// Create a dataset for a year
    pub fn new(year: i32, records: Vec<WageRecord>) -> Self {
        Self { year, records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A single averaged point of an occupation's wage series
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct YearPoint {
    pub year: i32,
    pub wage: f64,
}

/// Direction of a wage trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction for a percent change; `None` when flat or not finite
    pub fn from_change(percent_change: f64) -> Option<Self> {
        if !percent_change.is_finite() || percent_change == 0.0 {
            None
        } else if percent_change > 0.0 {
            Some(Direction::Up)
        } else {
            Some(Direction::Down)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Wage trend of one occupation across survey years
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TrendSummary {
    pub occupation: String,
    pub direction: Direction,
    /// Change from the earliest to the latest valid point, in percent
    pub percent_change: f64,
    pub point_count: usize,
    /// First and last year with a valid wage
    pub year_range: (i32, i32),
    /// Averaged series, sorted by year
    pub points: Vec<YearPoint>,
}

impl TrendSummary {
    /// Caption shown under a sparkline, e.g. `+30.0% (2019-2022)`
    pub fn caption(&self) -> String {
        format!(
            "{:+.1}% ({}-{})",
            self.percent_change, self.year_range.0, self.year_range.1
        )
    }
}

/// Cumulative inflation factors by year, relative to the base survey year
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InflationTable {
    factors: BTreeMap<i32, f64>,
}

impl InflationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the factor for a year
    pub fn insert(&mut self, year: i32, factor: f64) {
        self.factors.insert(year, factor);
    }

    /// Factor for a year, if known
    pub fn factor(&self, year: i32) -> Option<f64> {
        self.factors.get(&year).copied()
    }

    /// Number of years with a factor
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Check if no factors are known
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl FromIterator<(i32, f64)> for InflationTable {
    fn from_iter<T: IntoIterator<Item = (i32, f64)>>(iter: T) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}
