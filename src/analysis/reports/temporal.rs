//! Monthly series report formatter

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::MonthlyPoint;

/// Format the monthly complaint-volume series
pub fn format_monthly_series(
    series: &[MonthlyPoint],
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(&series),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("\n📊 Monthly Complaint Volume\n");
            output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

            if series.is_empty() {
                output.push_str("No dated complaint records found.\n");
                return Ok(output);
            }

            let total: usize = series.iter().map(|p| p.count).sum();
            output.push_str(&format!("Total dated records: {}\n", format_number(total)));
            output.push_str(&format!("Months with activity: {}\n\n", series.len()));

            output.push_str(&format!("{:<10} {:>12}\n", "Month", "Complaints"));
            output.push_str(&format!("{:-<10} {:->12}\n", "", ""));
            for point in series {
                output.push_str(&format!(
                    "{:<10} {:>12}\n",
                    point.month,
                    format_number(point.count)
                ));
            }
            output.push('\n');

            // Months without records are omitted, not zero-filled
            output.push_str("Note: only months with at least one complaint appear.\n");

            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_empty() {
        let output = format_monthly_series(&[], &OutputFormat::Console).unwrap();
        assert!(output.contains("No dated complaint records found."));
    }

    #[test]
    fn test_console_lists_months_in_order() {
        let series = vec![
            MonthlyPoint {
                month: "2023-01".to_string(),
                count: 2,
            },
            MonthlyPoint {
                month: "2023-03".to_string(),
                count: 5,
            },
        ];

        let output = format_monthly_series(&series, &OutputFormat::Console).unwrap();
        let jan = output.find("2023-01").unwrap();
        let mar = output.find("2023-03").unwrap();
        assert!(jan < mar);
        assert!(output.contains("Total dated records: 7"));
    }
}
