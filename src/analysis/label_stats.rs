//! Label frequency aggregation
//!
//! Streaming tallies for the category/state/channel count structures.
//! Ranking is deterministic: descending count, ties broken by ascending
//! label, so chart ordering is reproducible across runs.

use crate::types::LabelCount;
use std::collections::HashMap;

/// Streaming tally of label occurrences for one count dimension
#[derive(Debug, Default)]
pub struct LabelTally {
    counts: HashMap<String, usize>,
}

impl LabelTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one record's label for this dimension.
    ///
    /// Missing and blank labels are excluded from the count entirely, not
    /// folded into an "Unknown" bucket - bucketing them would shift every
    /// percentage derived downstream.
    pub fn observe(&mut self, label: Option<&str>) {
        if let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) {
            *self.counts.entry(label.to_string()).or_insert(0) += 1;
        }
    }

    /// Number of records observed with a usable label
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Finish the tally: rank descending by count, ties ascending by label
    pub fn into_ranked(self) -> Vec<LabelCount> {
        let mut ranked: Vec<LabelCount> = self
            .counts
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(labels: &[Option<&str>]) -> Vec<LabelCount> {
        let mut tally = LabelTally::new();
        for label in labels {
            tally.observe(*label);
        }
        tally.into_ranked()
    }

    #[test]
    fn test_counts_and_ranking() {
        let ranked = tally_of(&[
            Some("Mortgage"),
            Some("Credit card"),
            Some("Mortgage"),
            Some("Mortgage"),
            Some("Credit card"),
        ]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "Mortgage");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].label, "Credit card");
        assert_eq!(ranked[1].count, 2);
    }

    #[test]
    fn test_ties_break_by_ascending_label() {
        let ranked = tally_of(&[
            Some("Zeta"),
            Some("Alpha"),
            Some("Midway"),
            Some("Zeta"),
            Some("Alpha"),
            Some("Midway"),
        ]);

        let labels: Vec<&str> = ranked.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "Midway", "Zeta"]);
    }

    #[test]
    fn test_missing_and_blank_labels_excluded() {
        let ranked = tally_of(&[Some("Mortgage"), None, Some(""), Some("   "), None]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].count, 1);
    }

    #[test]
    fn test_total_counts_usable_labels_only() {
        let mut tally = LabelTally::new();
        tally.observe(Some("Web"));
        tally.observe(Some("Phone"));
        tally.observe(None);

        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_empty_tally() {
        let ranked = tally_of(&[]);
        assert!(ranked.is_empty());
    }
}
