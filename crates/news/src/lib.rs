//! Text analysis for financial news headlines.
//!
//! This crate provides the text-side leaves of the pipeline:
//!
//! - [`normalize`] - lowercase + punctuation-stripping text cleanup
//! - [`keywords`] - stopword-filtered keyword frequency extraction
//! - [`sentiment`] - lexicon-based polarity scoring in [-1, 1]
//!
//! All functions are pure transforms over their inputs; no state is
//! carried between rows.

pub mod keywords;
pub mod normalize;
pub mod sentiment;

pub use keywords::{extract_keywords, KeywordConfig, KeywordCount};
pub use normalize::normalize;
pub use sentiment::polarity;
