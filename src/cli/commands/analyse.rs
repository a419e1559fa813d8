use crate::analysis::{AggregationEngine, OutputFormat, ReportFormatter};
use crate::config::{AggregationConfig, AppConfig};
use crate::errors::{AppError, AppResult};
use crate::loader::CsvLoader;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

// ===== Helper Functions =====

/// Get complaints CSV path from CLI argument or config file
fn get_csv_path_from_config(
    cli_path: &Option<PathBuf>,
    app_config: &Option<AppConfig>,
) -> AppResult<PathBuf> {
    if let Some(path) = cli_path {
        Ok(path.clone())
    } else if let Some(config) = app_config {
        Ok(config.paths.complaints_csv.clone())
    } else {
        Err(AppError::Config(
            "No complaints CSV path provided. Use --csv-path or configure paths.complaints_csv in config.toml".to_string()
        ))
    }
}

/// Parse output format string to OutputFormat enum
fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}

/// Write output to file with safe directory creation
fn write_output_to_file(path: &PathBuf, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Load the CSV and build an engine with effective aggregation settings
fn build_engine(
    csv_path: &Option<PathBuf>,
    app_config: &Option<AppConfig>,
    bins: Option<usize>,
    primary_channel: &Option<String>,
) -> AppResult<AggregationEngine> {
    let path = get_csv_path_from_config(csv_path, app_config)?;
    if !path.exists() {
        return Err(AppError::Config(format!(
            "CSV file does not exist: {}",
            path.display()
        )));
    }

    let base = app_config
        .as_ref()
        .map(|c| c.aggregation.clone())
        .unwrap_or_default();
    let aggregation = AggregationConfig {
        histogram_bins: bins.unwrap_or(base.histogram_bins),
        primary_channel: primary_channel.clone().unwrap_or(base.primary_channel),
    };

    let outcome = CsvLoader::new(path).load()?;
    Ok(AggregationEngine::with_config(outcome.records, aggregation))
}

/// Run a simple analysis command (CSV path + format only)
fn run_simple_analysis<T, F, G>(
    csv_path: &Option<PathBuf>,
    format: &str,
    app_config: &Option<AppConfig>,
    bins: Option<usize>,
    primary_channel: &Option<String>,
    analyse_fn: F,
    format_fn: G,
) -> AppResult<()>
where
    F: FnOnce(&AggregationEngine) -> T,
    G: FnOnce(&T, &OutputFormat) -> AppResult<String>,
{
    let engine = build_engine(csv_path, app_config, bins, primary_channel)?;
    let analysis = analyse_fn(&engine);
    let output = format_fn(&analysis, &parse_format(format))?;
    print!("{}", output);
    Ok(())
}

// ===== Command Definitions =====

/// Count dimension selector for the `counts` subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CountDimension {
    Category,
    State,
    Channel,
}

/// Aggregation commands for complaint statistics and reports
#[derive(Args)]
pub struct AnalyseCommand {
    #[command(subcommand)]
    pub analysis_type: AnalysisCommands,
}

impl AnalyseCommand {
    pub fn run(&self) -> AppResult<()> {
        run_analysis(&self.analysis_type)
    }
}

/// Analysis command types
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Generate the full dashboard report (all aggregates plus summary)
    Full {
        /// Complaints CSV path (overrides config.toml)
        #[arg(long)]
        csv_path: Option<PathBuf>,

        /// Output format (console or json)
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Histogram bin count (overrides config.toml)
        #[arg(long)]
        bins: Option<usize>,

        /// Primary channel label for the preferred-channel share
        #[arg(long)]
        primary_channel: Option<String>,
    },

    /// Analyse complaint counts for one label dimension
    Counts {
        /// Complaints CSV path (overrides config.toml)
        #[arg(long)]
        csv_path: Option<PathBuf>,

        /// Output format (console or json)
        #[arg(long, default_value = "console")]
        format: String,

        /// Which label dimension to count
        #[arg(long, value_enum, default_value = "category")]
        dimension: CountDimension,
    },

    /// Analyse complaint volume per calendar month
    Monthly {
        /// Complaints CSV path (overrides config.toml)
        #[arg(long)]
        csv_path: Option<PathBuf>,

        /// Output format (console or json)
        #[arg(long, default_value = "console")]
        format: String,
    },

    /// Analyse narrative length distribution (histogram and percentiles)
    Narrative {
        /// Complaints CSV path (overrides config.toml)
        #[arg(long)]
        csv_path: Option<PathBuf>,

        /// Output format (console or json)
        #[arg(long, default_value = "console")]
        format: String,

        /// Histogram bin count (overrides config.toml)
        #[arg(long)]
        bins: Option<usize>,
    },

    /// Derive the headline summary scalars
    Summary {
        /// Complaints CSV path (overrides config.toml)
        #[arg(long)]
        csv_path: Option<PathBuf>,

        /// Output format (console or json)
        #[arg(long, default_value = "console")]
        format: String,

        /// Primary channel label for the preferred-channel share
        #[arg(long)]
        primary_channel: Option<String>,
    },
}

pub fn run_analysis(analysis_type: &AnalysisCommands) -> AppResult<()> {
    // Load configuration for default CSV path and aggregation settings
    let app_config = AppConfig::load().ok();

    match analysis_type {
        AnalysisCommands::Full {
            csv_path,
            format,
            output,
            bins,
            primary_channel,
        } => {
            let engine = build_engine(csv_path, &app_config, *bins, primary_channel)?;
            let dashboard = engine.generate_dashboard();
            let parsed_format = parse_format(format);
            let formatted = ReportFormatter::format_dashboard(&dashboard, &parsed_format)?;

            if let Some(path) = output {
                write_output_to_file(path, &formatted, "Dashboard report")?;
            } else {
                print!("{}", formatted);
            }
            Ok(())
        }

        AnalysisCommands::Counts {
            csv_path,
            format,
            dimension,
        } => run_simple_analysis(
            csv_path,
            format,
            &app_config,
            None,
            &None,
            |e| match dimension {
                CountDimension::Category => e.aggregate_categories(),
                CountDimension::State => e.aggregate_states(),
                CountDimension::Channel => e.aggregate_channels(),
            },
            |counts, f| {
                let name = match dimension {
                    CountDimension::Category => "Category",
                    CountDimension::State => "State",
                    CountDimension::Channel => "Channel",
                };
                ReportFormatter::format_counts(name, counts, f)
            },
        ),

        AnalysisCommands::Monthly { csv_path, format } => run_simple_analysis(
            csv_path,
            format,
            &app_config,
            None,
            &None,
            |e| e.aggregate_monthly_series(),
            |series, f| ReportFormatter::format_monthly_series(series, f),
        ),

        AnalysisCommands::Narrative {
            csv_path,
            format,
            bins,
        } => run_simple_analysis(
            csv_path,
            format,
            &app_config,
            *bins,
            &None,
            |e| e.analyse_narrative_lengths(),
            |report, f| ReportFormatter::format_narrative_report(report, f),
        ),

        AnalysisCommands::Summary {
            csv_path,
            format,
            primary_channel,
        } => run_simple_analysis(
            csv_path,
            format,
            &app_config,
            None,
            primary_channel,
            |e| {
                let aggregates = e.aggregate();
                e.derive_summary(&aggregates)
            },
            |summary, f| ReportFormatter::format_summary(summary, f),
        ),
    }
}
