//! Core types for the newslens analysis pipeline.
//!
//! This crate provides the shared data model used across all pipeline
//! stages: raw input records (headlines, price bars) and the
//! date-indexed series that every derived quantity is expressed as.

mod bar;
mod headline;
mod series;

pub use bar::PriceBar;
pub use headline::HeadlineRecord;
pub use series::{DailySeries, Date, MacdSeries};
