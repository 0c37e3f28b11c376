//! Technical indicators over daily price bars.
//!
//! Each indicator consumes a slice of [`PriceBar`]s (ordered oldest to
//! newest) and produces a [`DailySeries`] keyed by the bars' dates.
//! Dates inside the indicator's warm-up window are absent from the
//! output rather than filled with placeholder values.
//!
//! # Supported Indicators
//! - **SMA** - Simple Moving Average
//! - **EMA** - Exponential Moving Average
//! - **RSI** - Relative Strength Index (Wilder smoothing)
//! - **MACD** - Moving Average Convergence Divergence
//!
//! # Example
//! ```
//! use quant::indicators::{SeriesIndicator, Sma};
//! use types::PriceBar;
//!
//! let bars: Vec<PriceBar> = vec![/* ... */];
//! let sma = Sma::new(7);
//! let series = sma.series(&bars);
//! ```

mod ema;
mod macd;
mod rsi;
mod sma;

pub use ema::Ema;
pub use macd::Macd;
pub use rsi::Rsi;
pub use sma::Sma;

use types::{DailySeries, PriceBar};

/// Trait for indicators that produce a full date-indexed series.
///
/// Bars are expected to be ordered from oldest to newest with unique
/// dates.
pub trait SeriesIndicator {
    /// Compute the indicator over all bars.
    ///
    /// Dates with insufficient trailing data are absent from the
    /// result.
    fn series(&self, bars: &[PriceBar]) -> DailySeries;

    /// Minimum number of bars required before the first defined value.
    fn min_periods(&self) -> usize;
}

/// Closing prices of a bar slice, oldest to newest.
pub(crate) fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

// =============================================================================
// Tests
// =============================================================================
