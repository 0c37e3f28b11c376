//! Central configuration for an analysis run.
//!
//! Every window size and cut-off used by the pipeline lives here with
//! a documented default, so callers can override any of them per run
//! instead of relying on constants buried in the computation code.

/// Master configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Text analysis
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of top keywords (and top publishers) to report.
    pub top_n: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Market analysis
    // ─────────────────────────────────────────────────────────────────────────
    /// Simple moving average window over closing prices.
    pub sma_window: usize,
    /// RSI lookback window.
    pub rsi_window: usize,
    /// Rolling volatility window over daily returns.
    pub volatility_window: usize,
    /// MACD fast EMA period.
    pub macd_fast: usize,
    /// MACD slow EMA period.
    pub macd_slow: usize,
    /// MACD signal EMA period.
    pub macd_signal: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            sma_window: 7,
            rsi_window: 14,
            volatility_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl AnalysisConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the number of top keywords/publishers to report.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Set the SMA window.
    pub fn sma_window(mut self, window: usize) -> Self {
        self.sma_window = window;
        self
    }

    /// Set the RSI window.
    pub fn rsi_window(mut self, window: usize) -> Self {
        self.rsi_window = window;
        self
    }

    /// Set the volatility window.
    pub fn volatility_window(mut self, window: usize) -> Self {
        self.volatility_window = window;
        self
    }

    /// Set the MACD periods.
    pub fn macd(mut self, fast: usize, slow: usize, signal: usize) -> Self {
        self.macd_fast = fast;
        self.macd_slow = slow;
        self.macd_signal = signal;
        self
    }
}
