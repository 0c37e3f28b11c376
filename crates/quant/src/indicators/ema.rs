//! Exponential Moving Average (EMA) indicator.

use types::{DailySeries, PriceBar};

use super::{closes, SeriesIndicator};

/// Exponential Moving Average indicator.
///
/// Weights recent prices more heavily using exponential smoothing with
/// multiplier `2 / (period + 1)`. The series is seeded with the SMA of
/// the first `period` values, so the first defined date is the
/// `period`-th bar.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
}

impl Ema {
    /// Create a new EMA indicator with the given period.
    ///
    /// # Panics
    /// Panics if period is 0.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "EMA period must be > 0");
        Self { period }
    }
}

/// EMA over a value slice, aligned to the input index.
///
/// `result[i]` is `None` for `i < period - 1`; `result[period - 1]` is
/// the SMA seed; later entries apply the smoothing recurrence.
pub(crate) fn ema_values(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if values.len() < period || period == 0 {
        return out;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..values.len() {
        prev = (values[i] - prev) * multiplier + prev;
        out[i] = Some(prev);
    }

    out
}

impl SeriesIndicator for Ema {
    fn series(&self, bars: &[PriceBar]) -> DailySeries {
        let prices = closes(bars);
        bars.iter()
            .zip(ema_values(&prices, self.period))
            .filter_map(|(bar, value)| value.map(|v| (bar.date, v)))
            .collect()
    }

    fn min_periods(&self) -> usize {
        self.period
    }
}
