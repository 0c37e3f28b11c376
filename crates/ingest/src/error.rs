//! Ingestion error types.

/// Errors raised while loading input datasets.
///
/// All variants are structural load-time failures; analytical gaps
/// (warm-up windows, undefined returns) are represented as missing
/// series values downstream, never as errors here.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Underlying file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    /// A date cell could not be parsed.
    #[error("row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },

    /// A numeric cell could not be parsed.
    #[error("row {row}: unparseable {column} '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// Price bar dates are not strictly ascending and unique.
    #[error("row {row}: date {date} is not after the previous trading day")]
    OutOfOrderDates { row: usize, date: String },
}
