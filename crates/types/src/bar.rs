//! OHLCV price bar data.

use serde::{Deserialize, Serialize};

use crate::Date;

/// OHLCV data for a single trading day.
///
/// One bar per trading day. Consumers assume dates are unique and
/// sorted ascending; the ingestion layer enforces this at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date.
    pub date: Date,
    /// Opening price.
    pub open: f64,
    /// Highest price during the day.
    pub high: f64,
    /// Lowest price during the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Trading volume.
    pub volume: u64,
}

impl PriceBar {
    /// Create a new price bar.
    pub fn new(date: Date, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
