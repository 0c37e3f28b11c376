//! Descriptive statistics over the raw headline set.

use std::collections::HashMap;

use serde::Serialize;
use types::HeadlineRecord;

/// Headline length statistics in characters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineStats {
    /// Total number of headlines.
    pub count: usize,
    /// Shortest headline length.
    pub min_len: usize,
    /// Longest headline length.
    pub max_len: usize,
    /// Mean headline length.
    pub mean_len: f64,
}

impl HeadlineStats {
    /// Compute length statistics for a set of headlines.
    ///
    /// An empty set yields all-zero statistics rather than an error;
    /// downstream reporting treats it as "nothing to say".
    pub fn from_records(records: &[HeadlineRecord]) -> Self {
        if records.is_empty() {
            return Self {
                count: 0,
                min_len: 0,
                max_len: 0,
                mean_len: 0.0,
            };
        }

        let lengths: Vec<usize> = records.iter().map(|r| r.headline_len()).collect();
        let total: usize = lengths.iter().sum();

        Self {
            count: records.len(),
            min_len: *lengths.iter().min().unwrap(),
            max_len: *lengths.iter().max().unwrap(),
            mean_len: total as f64 / records.len() as f64,
        }
    }
}

/// A publisher and how many headlines it contributed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublisherCount {
    pub publisher: String,
    pub count: u64,
}

/// Count headlines per publisher and keep the `top_n` most prolific.
///
/// Ties are broken by which publisher appeared first in the input, so
/// repeated runs over the same file report the same order.
pub fn publisher_counts(records: &[HeadlineRecord], top_n: usize) -> Vec<PublisherCount> {
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for record in records {
        let rank = counts.len();
        let entry = counts.entry(record.publisher.as_str()).or_insert((0, rank));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(publisher, (count, rank))| (publisher, count, rank))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(publisher, count, _)| PublisherCount {
            publisher: publisher.to_string(),
            count,
        })
        .collect()
}
