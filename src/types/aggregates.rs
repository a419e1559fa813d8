//! Aggregate structures emitted by the aggregation engine
//!
//! All structures are created fresh on each aggregation request and are
//! read-only thereafter. Emission order is part of the contract: count
//! structures rank descending by count (ties ascending by label), the
//! monthly series ascends by month key.

use crate::utils::math::safe_percentage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label frequency entry for category/state/channel counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// One point of the monthly complaint-volume series
///
/// `month` is a "YYYY-MM" calendar-month key; only months with at least one
/// record are emitted, with no gap-filling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub count: usize,
}

/// One fixed-width bin of the narrative-length histogram
///
/// Bin semantics: [range_min, range_max) - inclusive min, exclusive max.
/// The last bin is closed on both ends so the observed maximum is counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower bound of bin range (inclusive)
    pub range_min: f64,
    /// Upper bound of bin range (exclusive, except last bin)
    pub range_max: f64,
    /// Number of narratives in this bin
    pub count: usize,
    /// Percentage of all narratives
    pub pct_count: f64,
}

impl HistogramBin {
    /// Create a new bin with its percentage computed against the narrative
    /// total (0.0 when the total is zero, no division fault).
    pub fn new(range_min: f64, range_max: f64, count: usize, total_count: usize) -> Self {
        Self {
            range_min,
            range_max,
            count,
            pct_count: safe_percentage(count, total_count),
        }
    }
}

/// Narrative-length percentile statistics keyed by percentile name
///
/// Keys: "min", "max", "mean", "p25", "p50", "p75", "p90", "p95", "p99".
/// The mapping is EMPTY when no record has a narrative - absence means
/// "no data", never "zero".
pub type NarrativeLengthStats = BTreeMap<String, f64>;

/// The five aggregate structures plus the percentile-stats mapping,
/// produced by one aggregation pass over the raw records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardAggregates {
    pub category_counts: Vec<LabelCount>,
    pub state_counts: Vec<LabelCount>,
    pub channel_counts: Vec<LabelCount>,
    pub monthly_series: Vec<MonthlyPoint>,
    pub narrative_histogram: Vec<HistogramBin>,
    pub narrative_length_stats: NarrativeLengthStats,
}

/// Narrative-length distribution on its own, for focused reporting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeLengthReport {
    pub histogram: Vec<HistogramBin>,
    pub stats: NarrativeLengthStats,
}

/// Headline scalars derived from the aggregate structures
///
/// `None` is the "no data" sentinel, distinguishing "insufficient data to
/// compute" from a legitimately-zero value. Shares are percentages in
/// [0, 100] and never NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryScalars {
    pub total_records: usize,
    pub num_categories: usize,
    pub top_category_label: Option<String>,
    pub top_category_share_pct: Option<f64>,
    pub preferred_channel_share_pct: f64,
    pub median_narrative_words: Option<f64>,
}

/// Complete dashboard payload: the aggregate structures plus the derived
/// summary, in the shape the presentation layer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintDashboard {
    #[serde(flatten)]
    pub aggregates: DashboardAggregates,
    pub summary: SummaryScalars,
}
