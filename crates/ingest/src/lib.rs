//! CSV ingestion for the newslens pipeline.
//!
//! Loads the two input datasets (news headlines, OHLCV bars) with
//! explicit schema validation at the boundary: headers are matched
//! case-insensitively and normalized up front, required columns are
//! rejected with a named error when absent, and structurally invalid
//! rows (bad dates, bad numbers, out-of-order trading days) fail fast.
//! Nothing downstream of this crate has to re-validate input shape.

mod error;
mod news;
mod schema;
mod stock;

pub use error::IngestError;
pub use news::load_news;
pub use stock::load_stock;
