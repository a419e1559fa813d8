//! Shared record fixtures for integration tests
#![allow(dead_code)]

use cfpb_complaint_analyser::types::ComplaintRecord;
use chrono::NaiveDate;

/// Minimal record: product only, everything else absent
pub fn record(product: &str) -> ComplaintRecord {
    ComplaintRecord {
        product: product.to_string(),
        state: None,
        channel: None,
        date: None,
        narrative_word_count: None,
    }
}

/// Record with a submission channel
pub fn record_with_channel(product: &str, channel: &str) -> ComplaintRecord {
    ComplaintRecord {
        channel: Some(channel.to_string()),
        ..record(product)
    }
}

/// Record with a narrative word count
pub fn record_with_narrative(product: &str, words: u64) -> ComplaintRecord {
    ComplaintRecord {
        narrative_word_count: Some(words),
        ..record(product)
    }
}

/// Fully-populated record
pub fn full_record(
    product: &str,
    state: &str,
    channel: &str,
    (year, month, day): (i32, u32, u32),
    words: u64,
) -> ComplaintRecord {
    ComplaintRecord {
        product: product.to_string(),
        state: Some(state.to_string()),
        channel: Some(channel.to_string()),
        date: NaiveDate::from_ymd_opt(year, month, day),
        narrative_word_count: Some(words),
    }
}
