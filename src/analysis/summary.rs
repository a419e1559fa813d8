//! Headline summary derivation
//!
//! Derives the dashboard's headline scalars from the aggregate structures
//! alone - never from the raw records - in O(k) over the already-reduced
//! counts. Every lookup is total: empty inputs produce `None` sentinels
//! and zero shares, never a division fault or NaN.

use crate::types::{DashboardAggregates, SummaryScalars};
use crate::utils::math::safe_percentage;

/// Deriver for headline summary scalars
pub struct SummaryDeriver;

impl SummaryDeriver {
    /// Derive the six headline scalars from the aggregate structures.
    ///
    /// `primary_channel` is matched case-insensitively as a substring
    /// against channel labels (e.g. "web" matches "Web" and "Web Referral").
    ///
    /// The sum of category counts is the canonical record total: category
    /// is the one label guaranteed present on a valid record, so the
    /// deriver never needs the original record set.
    pub fn derive(aggregates: &DashboardAggregates, primary_channel: &str) -> SummaryScalars {
        let total_records: usize = aggregates.category_counts.iter().map(|c| c.count).sum();
        let num_categories = aggregates.category_counts.len();

        // Category counts are already ranked; the first entry is dominant
        let top = aggregates.category_counts.first();
        let top_category_label = top.map(|c| c.label.clone());
        let top_category_share_pct = top.map(|c| safe_percentage(c.count, total_records));

        let channel_total: usize = aggregates.channel_counts.iter().map(|c| c.count).sum();
        let needle = primary_channel.to_lowercase();
        let matching: usize = aggregates
            .channel_counts
            .iter()
            .filter(|c| c.label.to_lowercase().contains(&needle))
            .map(|c| c.count)
            .sum();
        let preferred_channel_share_pct = safe_percentage(matching, channel_total);

        let median_narrative_words = aggregates.narrative_length_stats.get("p50").copied();

        SummaryScalars {
            total_records,
            num_categories,
            top_category_label,
            top_category_share_pct,
            preferred_channel_share_pct,
            median_narrative_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabelCount;

    fn counts(entries: &[(&str, usize)]) -> Vec<LabelCount> {
        entries
            .iter()
            .map(|(label, count)| LabelCount {
                label: label.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_empty_aggregates_yield_sentinels() {
        let summary = SummaryDeriver::derive(&DashboardAggregates::default(), "web");

        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.num_categories, 0);
        assert!(summary.top_category_label.is_none());
        assert!(summary.top_category_share_pct.is_none());
        assert_eq!(summary.preferred_channel_share_pct, 0.0);
        assert!(summary.median_narrative_words.is_none());
    }

    #[test]
    fn test_top_category_share() {
        let aggregates = DashboardAggregates {
            category_counts: counts(&[("Loans", 2), ("Cards", 1)]),
            ..Default::default()
        };

        let summary = SummaryDeriver::derive(&aggregates, "web");
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.num_categories, 2);
        assert_eq!(summary.top_category_label.as_deref(), Some("Loans"));

        let share = summary.top_category_share_pct.unwrap();
        assert!((share - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_preferred_channel_share_substring_match() {
        let aggregates = DashboardAggregates {
            channel_counts: counts(&[("Web", 1), ("Phone", 1)]),
            ..Default::default()
        };

        let summary = SummaryDeriver::derive(&aggregates, "web");
        assert_eq!(summary.preferred_channel_share_pct, 50.0);
    }

    #[test]
    fn test_preferred_channel_matches_all_variants() {
        let aggregates = DashboardAggregates {
            channel_counts: counts(&[("Web", 6), ("Web Referral", 2), ("Fax", 2)]),
            ..Default::default()
        };

        let summary = SummaryDeriver::derive(&aggregates, "WEB");
        assert_eq!(summary.preferred_channel_share_pct, 80.0);
    }

    #[test]
    fn test_preferred_channel_no_match_is_zero() {
        let aggregates = DashboardAggregates {
            channel_counts: counts(&[("Fax", 3)]),
            ..Default::default()
        };

        let summary = SummaryDeriver::derive(&aggregates, "web");
        assert_eq!(summary.preferred_channel_share_pct, 0.0);
    }

    #[test]
    fn test_median_comes_from_stats_mapping() {
        let mut aggregates = DashboardAggregates {
            category_counts: counts(&[("Loans", 1)]),
            ..Default::default()
        };
        aggregates
            .narrative_length_stats
            .insert("p50".to_string(), 25.0);

        let summary = SummaryDeriver::derive(&aggregates, "web");
        assert_eq!(summary.median_narrative_words, Some(25.0));
    }
}
