//! wages CLI - wage survey conversion and trend charts

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use wage_trends::config::{DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_REGION};
use wage_trends::prelude::*;
use wage_trends::XlsxReader;

#[derive(Parser)]
#[command(name = "wages")]
#[command(
    author,
    version,
    about = "Convert wage-survey spreadsheets and chart occupation wage trends"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where survey files live and which years to use
#[derive(Args)]
struct SurveyArgs {
    /// Directory with the raw survey spreadsheets
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory for converted JSON files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// First survey year
    #[arg(long = "from", default_value_t = wage_trends::config::DEFAULT_FIRST_YEAR)]
    first_year: i32,

    /// Last survey year
    #[arg(long = "to", default_value_t = wage_trends::config::DEFAULT_LAST_YEAR)]
    last_year: i32,
}

impl SurveyArgs {
    fn config(&self) -> SurveyConfig {
        SurveyConfig {
            data_dir: self.data_dir.clone(),
            output_dir: self.output_dir.clone(),
            first_year: self.first_year,
            last_year: self.last_year,
        }
    }
}

/// Options shared by the trend commands
#[derive(Args)]
struct TrendArgs {
    #[command(flatten)]
    survey: SurveyArgs,

    /// Region to chart, matched against AREA_TITLE
    #[arg(short, long, default_value = DEFAULT_REGION)]
    region: String,

    /// Seed for the presentation order (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Report wages in base-year dollars using the inflation table
    #[arg(long)]
    inflation: bool,

    /// Include summary occupation groups, not only detailed occupations
    #[arg(long)]
    all_groups: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every survey year and the inflation table to JSON
    Convert {
        #[command(flatten)]
        survey: SurveyArgs,
    },

    /// Convert a single spreadsheet to JSON
    ConvertFile {
        /// Input spreadsheet (xlsx, xlsm, csv)
        input: PathBuf,

        /// Output JSON file (default: <output-dir>/<input name>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory used when no output file is given
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// Print the selected wage trends for a region
    Trends {
        #[command(flatten)]
        args: TrendArgs,

        /// Print the trends as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an HTML dashboard of wage-trend sparklines
    Dashboard {
        #[command(flatten)]
        args: TrendArgs,

        /// Output HTML file
        #[arg(short, long, default_value = "dashboard.html")]
        output: PathBuf,
    },

    /// Show information about a spreadsheet
    Info {
        /// Input spreadsheet file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { survey } => convert(&survey.config()),
        Commands::ConvertFile {
            input,
            output,
            output_dir,
        } => {
            let output = output.unwrap_or_else(|| default_output(&input, &output_dir));
            convert_one(&input, &output)
        }
        Commands::Trends { args, json } => print_trends(&args, json),
        Commands::Dashboard { args, output } => write_dashboard(&args, &output),
        Commands::Info { input } => show_info(&input),
    }
}

/// `<output_dir>/<input stem>.json`
fn default_output(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{}.json", stem))
}

fn convert(config: &SurveyConfig) -> Result<()> {
    let report = convert_batch(config).with_context(|| {
        format!(
            "Failed to prepare output directory '{}'",
            config.output_dir.display()
        )
    })?;

    println!(
        "Converted {} files ({} records), skipped {}, failed {}",
        report.converted.len(),
        report.total_records(),
        report.skipped.len(),
        report.failed.len()
    );
    for (input, error) in &report.failed {
        println!("  failed: {}: {}", input.display(), error);
    }

    Ok(())
}

fn convert_one(input: &Path, output: &Path) -> Result<()> {
    let report = convert_file(input, output)
        .with_context(|| format!("Failed to convert '{}'", input.display()))?;

    println!(
        "Wrote {} records to '{}'{}",
        report.records,
        report.output.display(),
        report
            .year
            .map(|year| format!(" (YEAR {})", year))
            .unwrap_or_default()
    );
    if report.nulled > 0 {
        println!("  {} suppressed numeric values written as null", report.nulled);
    }

    Ok(())
}

/// Records, analyzer and load failures for a trend command
struct Analysis {
    outcome: LoadOutcome,
    analyzer: TrendAnalyzer,
    notes: Vec<String>,
}

fn analysis(args: &TrendArgs) -> Analysis {
    let mut loader = DatasetLoader::new(args.survey.config());
    let outcome = loader.load_all();

    let options = AnalyzerOptions {
        detailed_only: !args.all_groups,
        ..AnalyzerOptions::for_region(args.region.as_str())
    };
    let mut analyzer = TrendAnalyzer::new(options);
    let mut notes = Vec::new();

    if args.inflation {
        match loader.load_inflation() {
            Some(table) => analyzer = analyzer.with_inflation(table),
            None => notes.push("Inflation data unavailable; showing nominal wages".to_string()),
        }
        let missing = analyzer.years_without_factor(outcome.records());
        if !missing.is_empty() {
            let years: Vec<String> = missing.iter().map(|y| y.to_string()).collect();
            notes.push(format!(
                "No inflation factor for {}; those years are left out",
                years.join(", ")
            ));
        }
    }

    Analysis {
        outcome,
        analyzer,
        notes,
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_trends(args: &TrendArgs, json: bool) -> Result<()> {
    let Analysis {
        outcome,
        analyzer,
        notes,
    } = analysis(args);

    for note in &notes {
        log::warn!("{}", note);
    }

    let trends = analyzer.analyze(outcome.records(), &mut rng(args.seed));
    if json {
        let report = TrendReport::new(&analyzer, trends);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize trends")?
        );
        return Ok(());
    }
    if trends.is_empty() {
        println!("No wage trends found for '{}'", args.region);
        return Ok(());
    }

    println!(
        "{:<50} {:>5} {:>9} {:>11} {:>6}",
        "Occupation", "Trend", "Change", "Years", "Points"
    );
    for trend in &trends {
        println!(
            "{:<50} {:>5} {:>8.1}% {:>5}-{:<5} {:>6}",
            trend.occupation,
            trend.direction,
            trend.percent_change,
            trend.year_range.0,
            trend.year_range.1,
            trend.point_count
        );
    }

    Ok(())
}

fn write_dashboard(args: &TrendArgs, output: &Path) -> Result<()> {
    let Analysis {
        outcome,
        analyzer,
        notes,
    } = analysis(args);

    let trends = analyzer.analyze(outcome.records(), &mut rng(args.seed));
    let count = trends.len();

    let mut dashboard = Dashboard::new(args.region.as_str(), trends)
        .with_inflation_adjusted(analyzer.is_inflation_adjusted());
    dashboard.add_load_failures(&outcome.failures);
    for note in notes {
        dashboard.add_message(note);
    }

    let html = dashboard.render_html(&DashboardOptions::default());
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!("Wrote {} charts to '{}'", count, output.display());
    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let table =
        open_table(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());

    let is_xlsx = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx") || e.eq_ignore_ascii_case("xlsm"));
    if is_xlsx {
        let file = File::open(input)?;
        let names = XlsxReader::sheet_names(file)
            .with_context(|| format!("Failed to list sheets of '{}'", input.display()))?;
        println!("Sheets: {}", names.join(", "));
    }

    println!("Rows: {}", table.row_count());
    println!("Columns: {}", table.columns().join(", "));

    Ok(())
}
