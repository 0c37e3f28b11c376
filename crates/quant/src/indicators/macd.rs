//! MACD (Moving Average Convergence Divergence) indicator.

use types::{DailySeries, MacdSeries, PriceBar};

use super::ema::ema_values;
use super::{closes, SeriesIndicator};

/// MACD indicator.
///
/// MACD line = EMA(close, fast) - EMA(close, slow); signal line =
/// EMA(MACD line, signal); histogram = MACD - signal. Standard
/// configuration is (12, 26, 9).
#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Macd {
    /// Create a new MACD indicator with custom periods.
    ///
    /// # Panics
    /// Panics if any period is 0 or if fast >= slow.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0, "MACD fast period must be > 0");
        assert!(slow > 0, "MACD slow period must be > 0");
        assert!(signal > 0, "MACD signal period must be > 0");
        assert!(fast < slow, "MACD fast period must be < slow period");
        Self { fast, slow, signal }
    }

    /// Create MACD with the standard (12, 26, 9) configuration.
    pub fn standard() -> Self {
        Self::new(12, 26, 9)
    }

    /// Compute all three MACD outputs over the bars.
    ///
    /// The three series share the close-price date index. The MACD
    /// line is defined from the `slow`-th bar; signal and histogram
    /// need a further `signal - 1` bars to seed the signal EMA.
    pub fn macd_series(&self, bars: &[PriceBar]) -> MacdSeries {
        let prices = closes(bars);
        let fast_ema = ema_values(&prices, self.fast);
        let slow_ema = ema_values(&prices, self.slow);

        // MACD line wherever both EMAs are defined, kept compact for
        // the signal-line EMA with the owning bar index alongside.
        let mut macd_indices = Vec::new();
        let mut macd_values = Vec::new();
        for (i, (f, s)) in fast_ema.iter().zip(&slow_ema).enumerate() {
            if let (Some(f), Some(s)) = (f, s) {
                macd_indices.push(i);
                macd_values.push(f - s);
            }
        }

        let macd: DailySeries = macd_indices
            .iter()
            .zip(&macd_values)
            .map(|(&i, &v)| (bars[i].date, v))
            .collect();

        let mut signal = DailySeries::new();
        let mut histogram = DailySeries::new();
        for (k, sig) in ema_values(&macd_values, self.signal).into_iter().enumerate() {
            if let Some(sig) = sig {
                let date = bars[macd_indices[k]].date;
                signal.insert(date, sig);
                histogram.insert(date, macd_values[k] - sig);
            }
        }

        MacdSeries {
            macd,
            signal,
            histogram,
        }
    }
}

impl SeriesIndicator for Macd {
    /// The MACD line; use [`Macd::macd_series`] for all three outputs.
    fn series(&self, bars: &[PriceBar]) -> DailySeries {
        self.macd_series(bars).macd
    }

    /// Bars required before signal and histogram are defined.
    fn min_periods(&self) -> usize {
        self.slow + self.signal - 1
    }
}
