//! Date-indexed value series.
//!
//! Every derived quantity in the pipeline (daily sentiment, daily
//! returns, volatility, indicator outputs) is a [`DailySeries`]: a
//! sorted mapping from calendar date to `f64`. Undefined positions
//! (warm-up windows, zero-variance gaps) are simply absent from the
//! series rather than carried as NaN sentinels, so alignment and
//! serialization never have to special-case them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Calendar date used throughout the pipeline.
pub type Date = chrono::NaiveDate;

/// A sorted date-indexed series of `f64` values.
///
/// Keys are unique; iteration is always in ascending date order.
///
/// # Example
/// ```
/// use types::{DailySeries, Date};
///
/// let series: DailySeries = [
///     ("2024-01-02".parse::<Date>().unwrap(), 0.10),
///     ("2024-01-03".parse::<Date>().unwrap(), -0.10),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.first_date(), "2024-01-02".parse::<Date>().ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySeries(BTreeMap<Date, f64>);

impl DailySeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value for a date, replacing any previous value.
    pub fn insert(&mut self, date: Date, value: f64) {
        self.0.insert(date, value);
    }

    /// Get the value for a date, if defined.
    #[inline]
    pub fn get(&self, date: Date) -> Option<f64> {
        self.0.get(&date).copied()
    }

    /// Number of defined dates.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no dates are defined.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Earliest defined date.
    pub fn first_date(&self) -> Option<Date> {
        self.0.keys().next().copied()
    }

    /// Latest defined date.
    pub fn last_date(&self) -> Option<Date> {
        self.0.keys().next_back().copied()
    }

    /// Iterate over (date, value) pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.0.iter().map(|(d, v)| (*d, *v))
    }

    /// Values in ascending date order.
    pub fn values(&self) -> Vec<f64> {
        self.0.values().copied().collect()
    }

    /// Restrict the series to the closed date range `[from, to]`.
    ///
    /// This is a pre-filter only: it narrows the date domain but does
    /// not pair anything. Pairing across two series is
    /// [`inner_join`](Self::inner_join).
    pub fn clip(&self, from: Date, to: Date) -> Self {
        Self(
            self.0
                .range(from..=to)
                .map(|(d, v)| (*d, *v))
                .collect(),
        )
    }

    /// Pair this series with another on exactly-matching date keys.
    ///
    /// Dates present in only one of the two series are dropped. The
    /// result preserves ascending date order.
    pub fn inner_join(&self, other: &DailySeries) -> Vec<(f64, f64)> {
        self.0
            .iter()
            .filter_map(|(date, a)| other.get(*date).map(|b| (*a, b)))
            .collect()
    }
}

impl FromIterator<(Date, f64)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// MACD output series sharing the close-price date index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdSeries {
    /// MACD line (fast EMA - slow EMA).
    pub macd: DailySeries,
    /// Signal line (EMA of the MACD line).
    pub signal: DailySeries,
    /// Histogram (MACD - signal).
    pub histogram: DailySeries,
}
