//! Keyword frequency extraction.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::normalize;

/// Common English function words excluded from keyword counts.
const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "for", "to", "of", "in", "on", "with", "a", "an", "is", "as", "by", "at",
    "from", "after", "will",
];

/// Configuration for keyword extraction.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// Maximum number of keywords to return.
    pub top_n: usize,
    /// Tokens excluded from counting.
    pub stopwords: HashSet<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KeywordConfig {
    /// Create a config with default stopwords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of keywords to return.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Replace the stopword set.
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}

/// A keyword and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Normalized token.
    pub keyword: String,
    /// Number of occurrences across all headlines.
    pub count: u64,
}

/// Extract the most frequent non-stopword tokens from headlines.
///
/// Each headline is normalized and split on whitespace; counts are
/// accumulated globally across all headlines. The result is ordered by
/// descending count, ties broken by first-encountered order, and
/// truncated to `config.top_n`. When fewer distinct tokens exist than
/// `top_n`, the full filtered vocabulary is returned.
pub fn extract_keywords<S: AsRef<str>>(headlines: &[S], config: &KeywordConfig) -> Vec<KeywordCount> {
    // (count, first-seen rank) per token; the rank makes tie-breaking
    // deterministic regardless of map iteration order.
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
    let mut next_rank = 0usize;

    for headline in headlines {
        for token in normalize(headline.as_ref()).split_whitespace() {
            if config.stopwords.contains(token) {
                continue;
            }
            let entry = counts.entry(token.to_string()).or_insert_with(|| {
                let rank = next_rank;
                next_rank += 1;
                (0, rank)
            });
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, u64, usize)> = counts
        .into_iter()
        .map(|(token, (count, rank))| (token, count, rank))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(config.top_n);

    ranked
        .into_iter()
        .map(|(keyword, count, _)| KeywordCount { keyword, count })
        .collect()
}
