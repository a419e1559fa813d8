//! Monthly complaint-volume series
//!
//! Groups records by calendar month of submission. Only months with at
//! least one record are emitted, ascending by month key; gaps are not
//! interpolated.

use crate::types::MonthlyPoint;
use crate::utils::time::month_key;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Streaming tally of record counts per calendar month
#[derive(Debug, Default)]
pub struct MonthTally {
    counts: BTreeMap<String, usize>,
}

impl MonthTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one record's submission date. Records without a date are
    /// excluded from the series only.
    pub fn observe(&mut self, date: Option<NaiveDate>) {
        if let Some(date) = date {
            *self.counts.entry(month_key(date)).or_insert(0) += 1;
        }
    }

    /// Finish the tally: one point per observed month, ascending by month
    /// key ("YYYY-MM" keys sort chronologically).
    pub fn into_series(self) -> Vec<MonthlyPoint> {
        self.counts
            .into_iter()
            .map(|(month, count)| MonthlyPoint { month, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_groups_by_calendar_month() {
        let mut tally = MonthTally::new();
        tally.observe(Some(date(2023, 7, 1)));
        tally.observe(Some(date(2023, 7, 31)));
        tally.observe(Some(date(2023, 8, 2)));

        let series = tally.into_series();
        assert_eq!(
            series,
            vec![
                MonthlyPoint {
                    month: "2023-07".to_string(),
                    count: 2
                },
                MonthlyPoint {
                    month: "2023-08".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_series_is_ascending_regardless_of_input_order() {
        let mut tally = MonthTally::new();
        tally.observe(Some(date(2024, 1, 5)));
        tally.observe(Some(date(2023, 11, 5)));
        tally.observe(Some(date(2023, 12, 5)));

        let series = tally.into_series();
        let months: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2023-11", "2023-12", "2024-01"]);
    }

    #[test]
    fn test_no_gap_filling() {
        let mut tally = MonthTally::new();
        tally.observe(Some(date(2023, 1, 1)));
        tally.observe(Some(date(2023, 6, 1)));

        // Intervening empty months are absent, not zero-filled
        assert_eq!(tally.into_series().len(), 2);
    }

    #[test]
    fn test_dateless_records_excluded() {
        let mut tally = MonthTally::new();
        tally.observe(None);
        tally.observe(Some(date(2023, 3, 15)));

        let series = tally.into_series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].count, 1);
    }
}
