//! Relative Strength Index (RSI) indicator.

use types::{DailySeries, PriceBar};

use super::{closes, SeriesIndicator};

/// Relative Strength Index indicator.
///
/// Momentum oscillator on a 0-100 scale using Wilder's smoothing. The
/// average gain and loss are seeded with the simple mean of the first
/// `window` price changes, then smoothed with
/// `avg = (avg * (window - 1) + latest) / window`.
///
/// A window with zero average loss maps to RSI = 100 (this covers both
/// all-gain and perfectly flat windows), never a division error.
#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
}

impl Rsi {
    /// Create a new RSI indicator with the given window.
    ///
    /// # Panics
    /// Panics if window is 0.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "RSI window must be > 0");
        Self { window }
    }

    fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        }
    }
}

impl SeriesIndicator for Rsi {
    fn series(&self, bars: &[PriceBar]) -> DailySeries {
        let prices = closes(bars);
        let mut out = DailySeries::new();

        // window changes require window + 1 prices.
        if prices.len() <= self.window {
            return out;
        }

        let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();

        let (mut avg_gain, mut avg_loss) =
            changes
                .iter()
                .take(self.window)
                .fold((0.0, 0.0), |(g, l), &change| {
                    if change > 0.0 {
                        (g + change, l)
                    } else {
                        (g, l - change)
                    }
                });
        avg_gain /= self.window as f64;
        avg_loss /= self.window as f64;

        out.insert(
            bars[self.window].date,
            Self::rsi_from_averages(avg_gain, avg_loss),
        );

        let w = self.window as f64;
        for (i, &change) in changes.iter().enumerate().skip(self.window) {
            let (gain, loss) = if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            };
            avg_gain = (avg_gain * (w - 1.0) + gain) / w;
            avg_loss = (avg_loss * (w - 1.0) + loss) / w;

            out.insert(bars[i + 1].date, Self::rsi_from_averages(avg_gain, avg_loss));
        }

        out
    }

    fn min_periods(&self) -> usize {
        self.window + 1
    }
}
