//! Centralised aggregation module for the complaint analyser
//!
//! This module turns a loaded snapshot of complaint records into the
//! dashboard-ready aggregate structures consumed by the presentation layer.
//!
//! ## Overview
//!
//! The module is organised around the `AggregationEngine`, which owns one
//! immutable record snapshot and provides the main API for all aggregation
//! operations:
//!
//! - **Label Counts** - category/state/channel frequency structures
//! - **Monthly Series** - complaint volume per calendar month
//! - **Narrative Lengths** - histogram and percentile statistics
//! - **Summary Derivation** - headline scalars from the reduced structures
//! - **Report Generation** - formatted output for console and JSON export
//!
//! ## Usage
//!
//! ```rust
//! use cfpb_complaint_analyser::analysis::AggregationEngine;
//!
//! let engine = AggregationEngine::new(Vec::new());
//!
//! // Individual aggregates
//! let aggregates = engine.aggregate();
//! assert!(aggregates.category_counts.is_empty());
//!
//! // Complete dashboard payload (aggregates + derived summary)
//! let dashboard = engine.generate_dashboard();
//! assert_eq!(dashboard.summary.total_records, 0);
//! ```

pub mod label_stats;
pub mod monthly_series;
pub mod narrative_stats;
pub mod reports;
pub mod summary;

// Re-export main types and interfaces
pub use label_stats::LabelTally;
pub use monthly_series::MonthTally;
pub use narrative_stats::{NarrativeLengthAnalyser, DEFAULT_HISTOGRAM_BINS};
pub use reports::{OutputFormat, ReportFormatter};
pub use summary::SummaryDeriver;

use crate::config::AggregationConfig;
use crate::types::{
    ComplaintDashboard, ComplaintRecord, DashboardAggregates, LabelCount, MonthlyPoint,
    NarrativeLengthReport, SummaryScalars,
};

/// Main aggregation engine providing dashboard aggregation capabilities
///
/// The engine owns one immutable snapshot of complaint records for the
/// duration of a request. Aggregation is a pure function of that snapshot:
/// no I/O, no shared mutable state, so concurrent requests each build their
/// own engine with no locking.
pub struct AggregationEngine {
    records: Vec<ComplaintRecord>,
    config: AggregationConfig,
}

impl AggregationEngine {
    /// Create an engine over a record snapshot with default settings
    pub fn new(records: Vec<ComplaintRecord>) -> Self {
        Self::with_config(records, AggregationConfig::default())
    }

    /// Create an engine with explicit aggregation settings
    pub fn with_config(records: Vec<ComplaintRecord>, config: AggregationConfig) -> Self {
        Self { records, config }
    }

    /// Number of records in the snapshot
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Produce the five aggregate structures and the percentile-stats
    /// mapping in one pass over the snapshot.
    ///
    /// O(n) over the records plus O(k log k) to rank the distinct labels;
    /// additional space is O(k) in distinct labels/months/bins. A record
    /// missing the field an aggregate needs is excluded from that aggregate
    /// only - no row aborts the pass.
    pub fn aggregate(&self) -> DashboardAggregates {
        let mut categories = LabelTally::new();
        let mut states = LabelTally::new();
        let mut channels = LabelTally::new();
        let mut months = MonthTally::new();
        let mut narrative_lengths: Vec<u64> = Vec::new();

        for record in &self.records {
            categories.observe(record.product_label());
            states.observe(record.state_label());
            channels.observe(record.channel_label());
            months.observe(record.date);
            if let Some(words) = record.narrative_word_count {
                narrative_lengths.push(words);
            }
        }

        let narrative_histogram = NarrativeLengthAnalyser::build_histogram(
            &narrative_lengths,
            self.config.histogram_bins,
        );
        let narrative_length_stats =
            NarrativeLengthAnalyser::build_length_stats(&narrative_lengths);

        DashboardAggregates {
            category_counts: categories.into_ranked(),
            state_counts: states.into_ranked(),
            channel_counts: channels.into_ranked(),
            monthly_series: months.into_series(),
            narrative_histogram,
            narrative_length_stats,
        }
    }

    /// Ranked category counts
    pub fn aggregate_categories(&self) -> Vec<LabelCount> {
        self.aggregate().category_counts
    }

    /// Ranked state counts
    pub fn aggregate_states(&self) -> Vec<LabelCount> {
        self.aggregate().state_counts
    }

    /// Ranked channel counts
    pub fn aggregate_channels(&self) -> Vec<LabelCount> {
        self.aggregate().channel_counts
    }

    /// Monthly complaint-volume series, ascending by month
    pub fn aggregate_monthly_series(&self) -> Vec<MonthlyPoint> {
        self.aggregate().monthly_series
    }

    /// Narrative-length histogram and percentile statistics
    pub fn analyse_narrative_lengths(&self) -> NarrativeLengthReport {
        let aggregates = self.aggregate();
        NarrativeLengthReport {
            histogram: aggregates.narrative_histogram,
            stats: aggregates.narrative_length_stats,
        }
    }

    /// Derive the headline summary scalars from aggregate structures
    pub fn derive_summary(&self, aggregates: &DashboardAggregates) -> SummaryScalars {
        SummaryDeriver::derive(aggregates, &self.config.primary_channel)
    }

    /// Generate the complete dashboard payload: aggregates plus summary
    pub fn generate_dashboard(&self) -> ComplaintDashboard {
        let aggregates = self.aggregate();
        let summary = self.derive_summary(&aggregates);
        ComplaintDashboard {
            aggregates,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product: &str, channel: Option<&str>, words: Option<u64>) -> ComplaintRecord {
        ComplaintRecord {
            product: product.to_string(),
            state: None,
            channel: channel.map(str::to_string),
            date: None,
            narrative_word_count: words,
        }
    }

    #[test]
    fn test_engine_empty_snapshot() {
        let engine = AggregationEngine::new(Vec::new());
        let dashboard = engine.generate_dashboard();

        assert_eq!(dashboard.summary.total_records, 0);
        assert!(dashboard.aggregates.category_counts.is_empty());
        assert!(dashboard.aggregates.narrative_histogram.is_empty());
        assert!(dashboard.aggregates.narrative_length_stats.is_empty());
    }

    #[test]
    fn test_category_total_matches_summary_total() {
        let engine = AggregationEngine::new(vec![
            record("Loans", Some("Web"), Some(12)),
            record("Loans", None, None),
            record("Cards", Some("Phone"), Some(30)),
            record("", Some("Web"), None),
        ]);

        let dashboard = engine.generate_dashboard();
        let category_sum: usize = dashboard
            .aggregates
            .category_counts
            .iter()
            .map(|c| c.count)
            .sum();

        // Blank product excluded from counts AND from the record total
        assert_eq!(category_sum, 3);
        assert_eq!(dashboard.summary.total_records, 3);
    }

    #[test]
    fn test_histogram_counts_narrative_records_only() {
        let engine = AggregationEngine::new(vec![
            record("Loans", None, Some(10)),
            record("Loans", None, None),
            record("Cards", None, Some(40)),
        ]);

        let aggregates = engine.aggregate();
        let binned: usize = aggregates.narrative_histogram.iter().map(|b| b.count).sum();
        assert_eq!(binned, 2);
    }
}
