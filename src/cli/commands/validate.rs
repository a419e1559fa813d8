use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::loader::CsvLoader;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct ValidateCommand {
    /// Path to complaints CSV file (overrides config.toml and env vars)
    #[arg(long)]
    csv_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Complaint Analyser - CSV Validation ===");

        // Load configuration from file/environment; the CLI flag can stand
        // in for a missing config
        let config_path = match AppConfig::load() {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Some(config.paths.complaints_csv)
            }
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                None
            }
        };

        let csv_path = match self.csv_path.clone().or(config_path) {
            Some(path) => path,
            None => {
                return Err(crate::errors::AppError::Config(
                    "No complaints CSV path provided. Use --csv-path, set COMPLAINTS_CSV_PATH, or configure paths.complaints_csv in config.toml".to_string(),
                ))
            }
        };

        if !csv_path.exists() {
            return Err(crate::errors::AppError::Config(format!(
                "CSV file does not exist: {}",
                csv_path.display()
            )));
        }

        let loader = CsvLoader::new(csv_path);
        let outcome = loader.load()?;
        let stats = &outcome.stats;

        // Print summary
        println!(
            "
=== VALIDATION COMPLETE ==="
        );
        println!("Rows loaded: {}", stats.rows_read);
        println!("Malformed rows skipped: {}", stats.malformed_rows);
        println!("Error rate: {:.4}%", stats.error_rate());
        println!("Missing state: {}", stats.missing_state);
        println!("Missing channel: {}", stats.missing_channel);
        println!("Missing date: {}", stats.missing_date);
        println!("Missing narrative: {}", stats.missing_narrative);
        println!(
            "Narrative coverage: {:.2}%",
            stats.narrative_coverage_pct()
        );

        Ok(())
    }
}
