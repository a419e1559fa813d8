//! Full dashboard report formatter
//!
//! Composes the per-aggregate sections into the complete dashboard view.
//! JSON output is the payload the presentation layer consumes: the five
//! aggregate structures, the length-stats mapping, and the derived
//! summary in one object.

use super::OutputFormat;
use super::{counts, narrative, summary, temporal, utils};
use crate::errors::AppResult;
use crate::types::{ComplaintDashboard, NarrativeLengthReport};

/// Format the complete dashboard report
pub fn format_dashboard(
    dashboard: &ComplaintDashboard,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => utils::export_json(dashboard),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str(&summary::format_summary(&dashboard.summary, format)?);
            output.push_str(&counts::format_counts(
                "Category",
                &dashboard.aggregates.category_counts,
                format,
            )?);
            output.push_str(&counts::format_counts(
                "State",
                &dashboard.aggregates.state_counts,
                format,
            )?);
            output.push_str(&counts::format_counts(
                "Channel",
                &dashboard.aggregates.channel_counts,
                format,
            )?);
            output.push_str(&temporal::format_monthly_series(
                &dashboard.aggregates.monthly_series,
                format,
            )?);

            let narrative_report = NarrativeLengthReport {
                histogram: dashboard.aggregates.narrative_histogram.clone(),
                stats: dashboard.aggregates.narrative_length_stats.clone(),
            };
            output.push_str(&narrative::format_narrative_report(
                &narrative_report,
                format,
            )?);

            Ok(output)
        }
    }
}
