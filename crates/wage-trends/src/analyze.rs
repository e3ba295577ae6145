//! Per-occupation wage trends for one region
//!
//! Records are filtered to a region, averaged per (occupation, year) and
//! reduced to a [`TrendSummary`] per occupation. Selection keeps the largest
//! rising and falling trends and shuffles them for display.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::DEFAULT_REGION;
use wage_trends_core::{Direction, InflationTable, TrendSummary, WageRecord, YearPoint};

/// Options for trend analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Region name. `AREA_TITLE` must equal it, ignoring case and
    /// surrounding whitespace
    pub region: String,
    /// Minimum number of yearly points for a trend
    pub min_points: usize,
    /// Number of rising trends selected
    pub top_up: usize,
    /// Number of falling trends selected
    pub top_down: usize,
    /// Keep only detailed occupations
    pub detailed_only: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            min_points: 3,
            top_up: 15,
            top_down: 5,
            detailed_only: true,
        }
    }
}

impl AnalyzerOptions {
    /// Default options for another region
    pub fn for_region<S: Into<String>>(region: S) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }
}

/// Percent change from `earliest` to `latest`.
///
/// Not finite when `earliest` is zero.
pub fn percent_change(earliest: f64, latest: f64) -> f64 {
    (latest - earliest) / earliest * 100.0
}

/// Computes and selects wage trends
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    options: AnalyzerOptions,
    inflation: Option<InflationTable>,
}

impl TrendAnalyzer {
    /// Create an analyzer reporting nominal wages
    pub fn new(options: AnalyzerOptions) -> Self {
        Self {
            options,
            inflation: None,
        }
    }

    /// Report wages deflated to base-year dollars
    pub fn with_inflation(mut self, table: InflationTable) -> Self {
        self.inflation = Some(table);
        self
    }

    /// Analysis options
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Whether wages are inflation adjusted
    pub fn is_inflation_adjusted(&self) -> bool {
        self.inflation.is_some()
    }

    /// Whether a record belongs to the configured region and group
    pub fn matches_region(&self, record: &WageRecord) -> bool {
        if self.options.detailed_only && !record.is_detailed() {
            return false;
        }
        record
            .area_title
            .trim()
            .eq_ignore_ascii_case(self.options.region.trim())
    }

    /// Years with a wage in the region but no usable inflation factor.
    ///
    /// Empty when wages are nominal. These years are dropped from every
    /// series in inflation-adjusted mode.
    pub fn years_without_factor<'a, I>(&self, records: I) -> Vec<i32>
    where
        I: IntoIterator<Item = &'a WageRecord>,
    {
        let Some(table) = &self.inflation else {
            return Vec::new();
        };
        let years: BTreeSet<i32> = records
            .into_iter()
            .filter(|r| self.matches_region(r))
            .filter(|r| r.mean_annual_wage.is_some_and(f64::is_finite))
            .map(|r| r.year)
            .filter(|year| !table.factor(*year).is_some_and(|f| f > 0.0))
            .collect();
        years.into_iter().collect()
    }

    /// Averaged wage series per occupation, sorted by year.
    ///
    /// Records without a wage are ignored, so a year where every record is
    /// null has no point. In inflation-adjusted mode each point is deflated
    /// and years without a factor are dropped.
    pub fn occupation_series<'a, I>(&self, records: I) -> BTreeMap<String, Vec<YearPoint>>
    where
        I: IntoIterator<Item = &'a WageRecord>,
    {
        // occupation -> year -> (sum, count)
        let mut sums: BTreeMap<&str, BTreeMap<i32, (f64, usize)>> = BTreeMap::new();

        for record in records {
            if !self.matches_region(record) {
                continue;
            }
            let Some(wage) = record.mean_annual_wage.filter(|w| w.is_finite()) else {
                continue;
            };
            let entry = sums
                .entry(record.occupation_title.as_str())
                .or_default()
                .entry(record.year)
                .or_insert((0.0, 0));
            entry.0 += wage;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(occupation, years)| {
                let points = years
                    .into_iter()
                    .filter_map(|(year, (sum, count))| {
                        let wage = self.adjust(year, sum / count as f64)?;
                        Some(YearPoint { year, wage })
                    })
                    .collect();
                (occupation.to_string(), points)
            })
            .collect()
    }

    fn adjust(&self, year: i32, wage: f64) -> Option<f64> {
        match &self.inflation {
            None => Some(wage),
            Some(table) => table
                .factor(year)
                .filter(|f| *f > 0.0)
                .map(|factor| wage / factor),
        }
    }

    /// Trend summaries of every occupation with enough points and a
    /// non-zero change, ordered by occupation
    pub fn summarize<'a, I>(&self, records: I) -> Vec<TrendSummary>
    where
        I: IntoIterator<Item = &'a WageRecord>,
    {
        self.occupation_series(records)
            .into_iter()
            .filter_map(|(occupation, points)| self.summarize_series(occupation, points))
            .collect()
    }

    fn summarize_series(&self, occupation: String, points: Vec<YearPoint>) -> Option<TrendSummary> {
        if points.len() < self.options.min_points.max(2) {
            return None;
        }
        let first = *points.first()?;
        let last = *points.last()?;

        let change = percent_change(first.wage, last.wage);
        let direction = Direction::from_change(change)?;

        Some(TrendSummary {
            occupation,
            direction,
            percent_change: change,
            point_count: points.len(),
            year_range: (first.year, last.year),
            points,
        })
    }

    /// Pick the largest rising and falling trends, then shuffle them
    pub fn select<R: Rng + ?Sized>(
        &self,
        summaries: Vec<TrendSummary>,
        rng: &mut R,
    ) -> Vec<TrendSummary> {
        let (mut rising, mut falling): (Vec<_>, Vec<_>) = summaries
            .into_iter()
            .partition(|s| s.direction == Direction::Up);

        rising.sort_by(by_magnitude);
        falling.sort_by(by_magnitude);
        rising.truncate(self.options.top_up);
        falling.truncate(self.options.top_down);

        let mut selected = rising;
        selected.append(&mut falling);
        selected.shuffle(rng);
        selected
    }

    /// Summarize and select in one step
    pub fn analyze<'a, I, R>(&self, records: I, rng: &mut R) -> Vec<TrendSummary>
    where
        I: IntoIterator<Item = &'a WageRecord>,
        R: Rng + ?Sized,
    {
        let records: Vec<&WageRecord> = records.into_iter().collect();
        let missing = self.years_without_factor(records.iter().copied());
        if !missing.is_empty() {
            log::debug!("No inflation factor for years {:?}", missing);
        }

        let summaries = self.summarize(records);
        log::debug!(
            "{} occupations with a trend in {}",
            summaries.len(),
            self.options.region
        );
        self.select(summaries, rng)
    }
}

/// Selected trends of one region, as printed with `--json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub region: String,
    pub inflation_adjusted: bool,
    pub trends: Vec<TrendSummary>,
}

impl TrendReport {
    /// Report for trends produced by `analyzer`
    pub fn new(analyzer: &TrendAnalyzer, trends: Vec<TrendSummary>) -> Self {
        Self {
            region: analyzer.options.region.clone(),
            inflation_adjusted: analyzer.is_inflation_adjusted(),
            trends,
        }
    }
}

/// Largest absolute change first, ties by occupation
fn by_magnitude(a: &TrendSummary, b: &TrendSummary) -> Ordering {
    b.percent_change
        .abs()
        .total_cmp(&a.percent_change.abs())
        .then_with(|| a.occupation.cmp(&b.occupation))
}
