//! Orchestration of the newslens analysis pipeline.
//!
//! The leaves live in [`news`] and [`quant`]; this crate wires them
//! together:
//!
//! - [`config`] - one [`AnalysisConfig`] with every window and cut-off
//! - [`daily`] - per-day aggregation of headline sentiment
//! - [`summary`] - headline length and publisher statistics
//! - [`align`] - date alignment and Pearson correlation
//! - [`report`] - the runnable pipeline and its serializable output
//!
//! The entry point for callers is [`AnalysisReport::build`].

pub mod align;
pub mod config;
pub mod daily;
pub mod report;
pub mod summary;

pub use align::{align, correlate, sentiment_return_correlation};
pub use config::AnalysisConfig;
pub use daily::aggregate_daily_sentiment;
pub use report::{run_correlation, run_eda, run_market, AnalysisReport, EdaReport, MarketReport};
pub use summary::{publisher_counts, HeadlineStats, PublisherCount};
