//! CFPB Consumer Complaint Analyser - Type System
//!
//! - `aggregates`: aggregate structures emitted by the aggregation engine
//!   (label counts, monthly series, histogram, summary scalars)
//!
//! The raw input row type lives here at the module root.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod aggregates;

pub use aggregates::{
    ComplaintDashboard, DashboardAggregates, HistogramBin, LabelCount, MonthlyPoint,
    NarrativeLengthReport, NarrativeLengthStats, SummaryScalars,
};

/// One consumer-complaint record, as loaded from the CFPB complaints CSV.
///
/// Every field except `product` is optional: CFPB exports routinely omit
/// state codes, submission channels, dates, and narratives. A record missing
/// a field is excluded from the aggregates that need that field, and from
/// those only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Product category label. Blank means missing.
    pub product: String,
    /// Two-letter state code, when present
    pub state: Option<String>,
    /// Submission channel label ("Web", "Phone", "Referral", ...)
    pub channel: Option<String>,
    /// Submission date; only the calendar month is significant downstream
    pub date: Option<NaiveDate>,
    /// Word count of the complaint narrative, when a narrative was provided
    pub narrative_word_count: Option<u64>,
}

impl ComplaintRecord {
    /// Product label for counting, excluding blank values
    pub fn product_label(&self) -> Option<&str> {
        non_blank(&self.product)
    }

    /// State label for counting, excluding blank values
    pub fn state_label(&self) -> Option<&str> {
        self.state.as_deref().and_then(non_blank)
    }

    /// Channel label for counting, excluding blank values
    pub fn channel_label(&self) -> Option<&str> {
        self.channel.as_deref().and_then(non_blank)
    }

    /// Whether this record carries a narrative
    pub fn has_narrative(&self) -> bool {
        self.narrative_word_count.is_some()
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
