//! Label count report formatter
//!
//! Formats the category/state/channel frequency structures.

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::LabelCount;
use crate::utils::math::safe_percentage;

/// Format one ranked count structure
///
/// `dimension` names the count being displayed ("Category", "State",
/// "Channel") and appears in the console header only.
pub fn format_counts(
    dimension: &str,
    counts: &[LabelCount],
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(&counts),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str(&format!("\n📊 {} Complaint Counts\n", dimension));
            output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

            if counts.is_empty() {
                output.push_str("No complaint records found.\n");
                return Ok(output);
            }

            let total: usize = counts.iter().map(|c| c.count).sum();
            output.push_str(&format!("Total counted: {}\n", format_number(total)));
            output.push_str(&format!("Distinct labels: {}\n\n", counts.len()));

            output.push_str(&format!(
                "{:<44} {:>10} {:>11}\n",
                "Label", "Count", "% of Total"
            ));
            output.push_str(&format!("{:-<44} {:->10} {:->11}\n", "", "", ""));
            for entry in counts {
                output.push_str(&format!(
                    "{:<44} {:>10} {:>10.2}%\n",
                    entry.label,
                    format_number(entry.count),
                    safe_percentage(entry.count, total)
                ));
            }

            Ok(output)
        }
    }
}
