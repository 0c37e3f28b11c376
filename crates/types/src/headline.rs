//! News headline records.

use serde::{Deserialize, Serialize};

use crate::Date;

/// A single financial news headline, as loaded from the news dataset.
///
/// Records are immutable once loaded; derived values (length,
/// sentiment) are computed per row downstream and never written back
/// into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Headline text, as published.
    pub headline: String,
    /// Publication date.
    pub date: Date,
    /// Publishing outlet.
    pub publisher: String,
    /// Ticker symbol the headline is associated with.
    pub stock: String,
}

impl HeadlineRecord {
    /// Create a new headline record.
    pub fn new(
        headline: impl Into<String>,
        date: Date,
        publisher: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self {
            headline: headline.into(),
            date,
            publisher: publisher.into(),
            stock: stock.into(),
        }
    }

    /// Headline length in characters.
    #[inline]
    pub fn headline_len(&self) -> usize {
        self.headline.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn test_headline_len_counts_chars() {
        let rec = HeadlineRecord::new("AAA beats estimates", date("2024-01-01"), "Reuters", "AAA");
        assert_eq!(rec.headline_len(), 19);
    }
}
