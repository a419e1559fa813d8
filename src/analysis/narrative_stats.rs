//! Narrative-length distribution analysis
//!
//! Builds the fixed-width histogram and the percentile-stats mapping over
//! the word counts of records that carry a narrative. Records without a
//! narrative are excluded from both, and an input with no narratives at
//! all yields an empty histogram and an EMPTY stats mapping - absence
//! means "no data", never "zero".

use crate::types::{HistogramBin, NarrativeLengthStats};
use crate::utils::math::{mean, percentile};

/// Default number of equal-width histogram bins
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Percentile keys emitted in the stats mapping, with their ranks
const PERCENTILE_KEYS: [(&str, f64); 6] = [
    ("p25", 25.0),
    ("p50", 50.0),
    ("p75", 75.0),
    ("p90", 90.0),
    ("p95", 95.0),
    ("p99", 99.0),
];

/// Analyser for narrative word-count distributions
pub struct NarrativeLengthAnalyser;

impl NarrativeLengthAnalyser {
    /// Build an equal-width histogram over the observed word-count range.
    ///
    /// Bins are [min, max) with boundary values assigned to the upper bin;
    /// the last bin is closed on both ends so the observed maximum is
    /// counted. Degenerate range (min == max) emits a single bin covering
    /// that value.
    pub fn build_histogram(word_counts: &[u64], bin_count: usize) -> Vec<HistogramBin> {
        if word_counts.is_empty() {
            return Vec::new();
        }

        let bin_count = bin_count.max(1);
        let total = word_counts.len();
        let min = *word_counts.iter().min().unwrap_or(&0);
        let max = *word_counts.iter().max().unwrap_or(&0);

        if min == max {
            return vec![HistogramBin::new(min as f64, max as f64, total, total)];
        }

        let width = (max - min) as f64 / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for &value in word_counts {
            let index = ((value - min) as f64 / width).floor() as usize;
            // The observed maximum lands exactly on the last boundary;
            // clamping closes the final bin.
            counts[index.min(bin_count - 1)] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let lower = min as f64 + width * i as f64;
                let upper = if i + 1 == bin_count {
                    max as f64
                } else {
                    min as f64 + width * (i + 1) as f64
                };
                HistogramBin::new(lower, upper, count, total)
            })
            .collect()
    }

    /// Compute the percentile-stats mapping over narrative word counts.
    ///
    /// Percentiles use linear interpolation between order statistics, so
    /// the result is independent of input order. Returns an empty mapping
    /// when no record has a narrative.
    pub fn build_length_stats(word_counts: &[u64]) -> NarrativeLengthStats {
        let mut stats = NarrativeLengthStats::new();
        if word_counts.is_empty() {
            return stats;
        }

        let mut sorted = word_counts.to_vec();
        sorted.sort_unstable();

        stats.insert("min".to_string(), sorted[0] as f64);
        stats.insert("max".to_string(), sorted[sorted.len() - 1] as f64);
        stats.insert("mean".to_string(), mean(&sorted));
        for (key, pct) in PERCENTILE_KEYS {
            stats.insert(key.to_string(), percentile(&sorted, pct));
        }

        stats
    }
}
