//! Headline summary report formatter

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::SummaryScalars;

/// Format the headline summary scalars
///
/// "no data" sentinels render as literal "no data" on the console so an
/// empty dataset reads as an empty state, not as zeros.
pub fn format_summary(summary: &SummaryScalars, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(summary),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("\n📊 Complaint Dashboard Summary\n");
            output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

            output.push_str(&format!(
                "Total records: {}\n",
                format_number(summary.total_records)
            ));
            output.push_str(&format!(
                "Distinct categories: {}\n",
                format_number(summary.num_categories)
            ));

            match (&summary.top_category_label, summary.top_category_share_pct) {
                (Some(label), Some(share)) => {
                    output.push_str(&format!(
                        "Top category: {} ({:.1}% of records)\n",
                        label, share
                    ));
                }
                _ => output.push_str("Top category: no data\n"),
            }

            output.push_str(&format!(
                "Preferred channel share: {:.1}%\n",
                summary.preferred_channel_share_pct
            ));

            match summary.median_narrative_words {
                Some(median) => {
                    output.push_str(&format!("Median narrative length: {:.1} words\n", median))
                }
                None => output.push_str("Median narrative length: no data\n"),
            }

            Ok(output)
        }
    }
}
