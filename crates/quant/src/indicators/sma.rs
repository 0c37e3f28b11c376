//! Simple Moving Average (SMA) indicator.

use types::{DailySeries, PriceBar};

use super::{closes, SeriesIndicator};

/// Simple Moving Average indicator.
///
/// The value at each date is the arithmetic mean of the trailing
/// `window` closing prices ending at that date. `Sma::new(1)` is the
/// identity on the close series.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA indicator with the given window.
    ///
    /// # Panics
    /// Panics if window is 0.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "SMA window must be > 0");
        Self { window }
    }
}

impl SeriesIndicator for Sma {
    fn series(&self, bars: &[PriceBar]) -> DailySeries {
        let prices = closes(bars);
        let mut out = DailySeries::new();
        if prices.len() < self.window {
            return out;
        }

        // Rolling sum; one subtraction and addition per step.
        let mut sum: f64 = prices[..self.window].iter().sum();
        out.insert(bars[self.window - 1].date, sum / self.window as f64);

        for i in self.window..prices.len() {
            sum += prices[i] - prices[i - self.window];
            out.insert(bars[i].date, sum / self.window as f64);
        }

        out
    }

    fn min_periods(&self) -> usize {
        self.window
    }
}
