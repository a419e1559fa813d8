use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub complaints_csv: PathBuf,
}

/// Aggregation settings consumed by the engine and summary deriver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Number of equal-width narrative-length histogram bins
    pub histogram_bins: usize,
    /// Channel label matched (case-insensitive substring) for the
    /// preferred-channel share
    pub primary_channel: String,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            histogram_bins: crate::analysis::narrative_stats::DEFAULT_HISTOGRAM_BINS,
            primary_channel: "web".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AggregationConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("paths.complaints_csv", "/dev/null")? // Will be overridden
            .set_default(
                "aggregation.histogram_bins",
                defaults.histogram_bins as i64,
            )?
            .set_default("aggregation.primary_channel", defaults.primary_channel)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables
            // COMPLAINTS_CSV_PATH env variable overrides paths.complaints_csv
            .add_source(config::Environment::with_prefix("COMPLAINTS"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(csv_path) = env::var("COMPLAINTS_CSV_PATH") {
            app_config.paths.complaints_csv = PathBuf::from(csv_path);
        }

        // Validate that the CSV path was actually configured
        if app_config.paths.complaints_csv == PathBuf::from("/dev/null") {
            return Err(ConfigError::Message(
                "Complaints CSV path not configured. Please set COMPLAINTS_CSV_PATH environment variable or configure paths.complaints_csv in config.toml".to_string()
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => {
                // Return sensible defaults if no config found
                Ok(Self {
                    paths: PathsConfig {
                        complaints_csv: PathBuf::from("./data/input/complaints.csv"),
                    },
                    aggregation: AggregationConfig::default(),
                })
            }
        }
    }
}
