//! Header resolution and cell parsing shared by both loaders.

use csv::StringRecord;
use types::Date;

use crate::IngestError;

/// Accepted date layouts. Timestamped cells keep only the date part.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y"];

/// Resolve a required column by case-insensitive header match.
pub(crate) fn require_column(headers: &StringRecord, name: &str) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
        })
}

/// Fetch a cell by index; short rows read as empty cells.
pub(crate) fn cell<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

/// Parse a date cell, trying each accepted layout in turn.
pub(crate) fn parse_date(value: &str, row: usize) -> Result<Date, IngestError> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| {
            chrono::NaiveDateTime::parse_from_str(value, fmt)
                .map(|dt| dt.date())
                .or_else(|_| Date::parse_from_str(value, fmt))
                .ok()
        })
        .ok_or_else(|| IngestError::InvalidDate {
            row,
            value: value.to_string(),
        })
}

/// Parse a numeric cell.
pub(crate) fn parse_number<T: std::str::FromStr>(
    value: &str,
    row: usize,
    column: &str,
) -> Result<T, IngestError> {
    value.parse().map_err(|_| IngestError::InvalidNumber {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}
