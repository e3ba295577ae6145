//! Locations and naming of survey files

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Directory holding the raw survey spreadsheets
pub const DEFAULT_DATA_DIR: &str = "data";

/// Directory the converted JSON files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";

/// First survey year converted and charted by default
pub const DEFAULT_FIRST_YEAR: i32 = 2017;

/// Last survey year converted and charted by default
pub const DEFAULT_LAST_YEAR: i32 = 2023;

/// Region charted when none is given
pub const DEFAULT_REGION: &str = "Wisconsin";

/// File stem of the inflation spreadsheet
pub const INFLATION_STEM: &str = "inflation";

/// Extensions tried, in order, when looking for a raw spreadsheet
pub const SPREADSHEET_EXTENSIONS: [&str; 3] = ["xlsx", "xlsm", "csv"];

/// File stem of a state wage survey for a year, e.g. `state_M2019_dl`
pub fn wage_file_stem(year: i32) -> String {
    format!("state_M{}_dl", year)
}

/// Where survey files live and which years are in play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Directory with raw spreadsheets
    pub data_dir: PathBuf,
    /// Directory for converted JSON
    pub output_dir: PathBuf,
    pub first_year: i32,
    pub last_year: i32,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
        }
    }
}

impl SurveyConfig {
    /// Config rooted at a base directory (`<base>/data`, `<base>/public/data`)
    pub fn rooted_at<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self {
            data_dir: base.join(DEFAULT_DATA_DIR),
            output_dir: base.join(DEFAULT_OUTPUT_DIR),
            ..Self::default()
        }
    }

    /// Survey years, oldest first
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    /// First existing raw spreadsheet for a file stem, trying each known
    /// extension in order
    pub fn find_spreadsheet(&self, stem: &str) -> Option<PathBuf> {
        SPREADSHEET_EXTENSIONS
            .iter()
            .map(|ext| self.data_dir.join(format!("{}.{}", stem, ext)))
            .find(|path| path.is_file())
    }

    /// Raw spreadsheet path for a survey year (`.xlsx`)
    pub fn wage_input(&self, year: i32) -> PathBuf {
        self.data_dir.join(format!("{}.xlsx", wage_file_stem(year)))
    }

    /// Converted JSON path for a survey year
    pub fn wage_output(&self, year: i32) -> PathBuf {
        self.output_dir.join(format!("{}.json", wage_file_stem(year)))
    }

    /// Converted JSON path of the inflation table
    pub fn inflation_output(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", INFLATION_STEM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SurveyConfig::default();
        assert_eq!(config.years().count(), 7);
        assert_eq!(
            config.wage_input(2019),
            PathBuf::from("data/state_M2019_dl.xlsx")
        );
        assert_eq!(
            config.wage_output(2019),
            PathBuf::from("public/data/state_M2019_dl.json")
        );
        assert_eq!(
            config.inflation_output(),
            PathBuf::from("public/data/inflation.json")
        );
    }

    #[test]
    fn test_find_spreadsheet_prefers_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let config = SurveyConfig::rooted_at(dir.path());
        std::fs::create_dir_all(&config.data_dir).unwrap();

        assert_eq!(config.find_spreadsheet("inflation"), None);

        std::fs::write(config.data_dir.join("inflation.csv"), "Year,Inflation\n").unwrap();
        assert_eq!(
            config.find_spreadsheet("inflation"),
            Some(config.data_dir.join("inflation.csv"))
        );

        std::fs::write(config.data_dir.join("inflation.xlsx"), b"").unwrap();
        assert_eq!(
            config.find_spreadsheet("inflation"),
            Some(config.data_dir.join("inflation.xlsx"))
        );
    }
}
