//! Quantitative analysis for the newslens pipeline.
//!
//! This crate provides the numeric side of the analysis:
//!
//! - [`stats`] - statistical utilities (mean, variance, correlation)
//! - [`returns`] - daily returns and rolling volatility
//! - [`indicators`] - technical indicators (SMA, EMA, RSI, MACD)
//!
//! # Design Notes
//!
//! - All calculations use `f64`
//! - Analytically undefined positions (warm-up windows, zero-price
//!   gaps) are absent from output series rather than NaN
//! - Every value at date *i* depends only on data at dates <= *i*

pub mod indicators;
pub mod returns;
pub mod stats;

pub use indicators::{Ema, Macd, Rsi, SeriesIndicator, Sma};
pub use returns::{daily_returns, rolling_volatility};
