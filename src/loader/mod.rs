//! CSV loader for CFPB complaint exports
//!
//! Reads the bulk complaints CSV into an in-memory record snapshot for the
//! aggregation engine. Loading is row-tolerant: a row that fails to parse
//! is logged and skipped, never fatal, and a row missing individual fields
//! still loads with those fields absent.

use crate::errors::{AppError, AppResult};
use crate::types::ComplaintRecord;
use crate::utils::math::safe_percentage;
use crate::utils::time::parse_complaint_date;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, warn};

/// Raw CSV row - matches the CFPB bulk export headers
///
/// The export carries more columns (company, issue, tags, ...); only the
/// fields the aggregation layer consumes are deserialised, the rest are
/// ignored by the reader.
#[derive(Debug, Deserialize)]
struct RawComplaintRow {
    #[serde(rename = "Date received", default)]
    date_received: Option<String>,
    #[serde(rename = "Product", default)]
    product: Option<String>,
    #[serde(rename = "State", default)]
    state: Option<String>,
    #[serde(rename = "Submitted via", default)]
    submitted_via: Option<String>,
    #[serde(rename = "Consumer complaint narrative", default)]
    narrative: Option<String>,
}

impl RawComplaintRow {
    /// Convert to a ComplaintRecord. Total: blank fields become None and
    /// unparseable dates are dropped, so no row conversion can fail.
    fn into_record(self) -> ComplaintRecord {
        let narrative_word_count = self
            .narrative
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| text.split_whitespace().count() as u64);

        ComplaintRecord {
            product: self.product.unwrap_or_default(),
            state: normalise_label(self.state),
            channel: normalise_label(self.submitted_via),
            date: self
                .date_received
                .as_deref()
                .and_then(parse_complaint_date),
            narrative_word_count,
        }
    }
}

fn normalise_label(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Statistics collected during one CSV load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub rows_read: usize,
    pub malformed_rows: usize,
    pub missing_state: usize,
    pub missing_channel: usize,
    pub missing_date: usize,
    pub missing_narrative: usize,
}

impl LoadStats {
    /// Percentage of loaded rows that carry a narrative
    pub fn narrative_coverage_pct(&self) -> f64 {
        safe_percentage(self.rows_read - self.missing_narrative, self.rows_read)
    }

    /// Percentage of input rows rejected as malformed
    pub fn error_rate(&self) -> f64 {
        safe_percentage(self.malformed_rows, self.rows_read + self.malformed_rows)
    }
}

/// Result of one CSV load: the record snapshot plus load statistics
#[derive(Debug)]
pub struct LoadOutcome {
    pub records: Vec<ComplaintRecord>,
    pub stats: LoadStats,
}

/// CSV loader for complaint records
pub struct CsvLoader {
    csv_path: PathBuf,
}

impl CsvLoader {
    pub fn new(csv_path: PathBuf) -> Self {
        info!("CSV loader initialised");
        info!("Source CSV: {}", csv_path.display());
        Self { csv_path }
    }

    /// Load the complaints CSV into memory
    pub fn load(&self) -> AppResult<LoadOutcome> {
        info!("Loading complaints from {}", self.csv_path.display());

        let file = File::open(&self.csv_path).map_err(AppError::Io)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        for (row_index, result) in reader.deserialize::<RawComplaintRow>().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    // +2: header line plus one-based numbering
                    warn!("Skipping malformed row at line {}: {}", row_index + 2, e);
                    stats.malformed_rows += 1;
                    continue;
                }
            };

            let record = row.into_record();
            stats.rows_read += 1;
            if record.state.is_none() {
                stats.missing_state += 1;
            }
            if record.channel.is_none() {
                stats.missing_channel += 1;
            }
            if record.date.is_none() {
                stats.missing_date += 1;
            }
            if !record.has_narrative() {
                stats.missing_narrative += 1;
            }

            records.push(record);
        }

        info!("CSV load completed");
        info!("Rows loaded: {}", stats.rows_read);
        info!("Malformed rows skipped: {}", stats.malformed_rows);
        info!(
            "Narrative coverage: {:.2}%",
            stats.narrative_coverage_pct()
        );

        Ok(LoadOutcome { records, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_blank_fields() {
        let row = RawComplaintRow {
            date_received: Some("".to_string()),
            product: None,
            state: Some("  ".to_string()),
            submitted_via: Some("Web".to_string()),
            narrative: Some("".to_string()),
        };

        let record = row.into_record();
        assert_eq!(record.product, "");
        assert!(record.state.is_none());
        assert_eq!(record.channel.as_deref(), Some("Web"));
        assert!(record.date.is_none());
        assert!(record.narrative_word_count.is_none());
    }

    #[test]
    fn test_row_conversion_word_count() {
        let row = RawComplaintRow {
            date_received: Some("2023-07-14".to_string()),
            product: Some("Mortgage".to_string()),
            state: Some("CA".to_string()),
            submitted_via: Some("Web".to_string()),
            narrative: Some("I was charged   twice for the same payment".to_string()),
        };

        let record = row.into_record();
        assert_eq!(record.narrative_word_count, Some(8));
        assert!(record.date.is_some());
    }

    #[test]
    fn test_load_stats_rates() {
        let stats = LoadStats {
            rows_read: 80,
            malformed_rows: 20,
            missing_narrative: 60,
            ..Default::default()
        };

        assert_eq!(stats.narrative_coverage_pct(), 25.0);
        assert_eq!(stats.error_rate(), 20.0);
    }

    #[test]
    fn test_load_stats_empty_no_division_fault() {
        let stats = LoadStats::default();
        assert_eq!(stats.narrative_coverage_pct(), 0.0);
        assert_eq!(stats.error_rate(), 0.0);
    }
}
