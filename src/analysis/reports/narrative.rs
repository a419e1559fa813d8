//! Narrative-length distribution report formatter

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::NarrativeLengthReport;

/// Display order for the percentile-stats table
const STAT_ORDER: [&str; 9] = [
    "min", "p25", "p50", "p75", "p90", "p95", "p99", "max", "mean",
];

/// Format the narrative-length histogram and percentile statistics
pub fn format_narrative_report(
    report: &NarrativeLengthReport,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("\n📊 Narrative Length Distribution\n");
            output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

            if report.histogram.is_empty() {
                output.push_str("No complaint narratives found.\n");
                return Ok(output);
            }

            let total: usize = report.histogram.iter().map(|b| b.count).sum();
            output.push_str(&format!(
                "Narratives analysed: {}\n\n",
                format_number(total)
            ));

            output.push_str("Word Count Statistics:\n");
            output.push_str(&format!("  {:<8} {:>12}\n", "Stat", "Words"));
            output.push_str(&format!("  {:-<8} {:->12}\n", "", ""));
            for key in STAT_ORDER {
                if let Some(value) = report.stats.get(key) {
                    output.push_str(&format!("  {:<8} {:>12.1}\n", key, value));
                }
            }
            output.push('\n');

            output.push_str("Histogram (word count bins):\n");
            output.push_str(&format!(
                "  {:<22} {:>10} {:>11}\n",
                "Bin", "Count", "% of Total"
            ));
            output.push_str(&format!("  {:-<22} {:->10} {:->11}\n", "", "", ""));
            for bin in &report.histogram {
                let range = format!("{:.0} - {:.0}", bin.range_min, bin.range_max);
                output.push_str(&format!(
                    "  {:<22} {:>10} {:>10.2}%\n",
                    range,
                    format_number(bin.count),
                    bin.pct_count
                ));
            }

            Ok(output)
        }
    }
}
