//! News headline CSV loading.

use std::path::Path;

use tracing::debug;
use types::HeadlineRecord;

use crate::schema::{cell, parse_date, require_column};
use crate::IngestError;

/// Load news headline records from a CSV file.
///
/// Required columns (matched case-insensitively): `headline`, `date`,
/// `publisher`, `stock`. Extra columns are ignored. Any unparseable
/// date fails the whole load; there is no row-level recovery.
pub fn load_news(path: impl AsRef<Path>) -> Result<Vec<HeadlineRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let headline_idx = require_column(&headers, "headline")?;
    let date_idx = require_column(&headers, "date")?;
    let publisher_idx = require_column(&headers, "publisher")?;
    let stock_idx = require_column(&headers, "stock")?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        // Header is row 1 in the file; data rows are 1-based after it.
        let row = row + 2;

        records.push(HeadlineRecord {
            headline: cell(&record, headline_idx).to_string(),
            date: parse_date(cell(&record, date_idx), row)?,
            publisher: cell(&record, publisher_idx).to_string(),
            stock: cell(&record, stock_idx).to_string(),
        });
    }

    debug!(rows = records.len(), "loaded news records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_news_basic() {
        let file = write_csv(
            "headline,date,publisher,stock\n\
             AAA beats estimates,2024-01-01,Reuters,AAA\n\
             AAA misses guidance,2024-01-02,Bloomberg,AAA\n",
        );

        let records = load_news(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].headline, "AAA beats estimates");
        assert_eq!(records[0].publisher, "Reuters");
        assert_eq!(records[1].date, "2024-01-02".parse().unwrap());
    }

    #[test]
    fn test_load_news_case_insensitive_headers() {
        let file = write_csv(
            "Headline,DATE,Publisher,Stock\n\
             Upbeat quarter,2024-03-01,WSJ,XYZ\n",
        );

        let records = load_news(file.path()).unwrap();
        assert_eq!(records[0].stock, "XYZ");
    }

    #[test]
    fn test_load_news_extra_columns_ignored() {
        let file = write_csv(
            "url,headline,date,publisher,stock\n\
             http://x,Upbeat quarter,2024-03-01,WSJ,XYZ\n",
        );

        let records = load_news(file.path()).unwrap();
        assert_eq!(records[0].headline, "Upbeat quarter");
    }

    #[test]
    fn test_load_news_missing_column() {
        let file = write_csv("headline,date,publisher\nfoo,2024-01-01,bar\n");

        match load_news(file.path()) {
            Err(IngestError::MissingColumn { column }) => assert_eq!(column, "stock"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_news_bad_date() {
        let file = write_csv(
            "headline,date,publisher,stock\n\
             foo,soon,bar,XYZ\n",
        );

        match load_news(file.path()) {
            Err(IngestError::InvalidDate { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_load_news_timestamped_dates() {
        let file = write_csv(
            "headline,date,publisher,stock\n\
             foo,2024-01-01 09:30:00,bar,XYZ\n",
        );

        let records = load_news(file.path()).unwrap();
        assert_eq!(records[0].date, "2024-01-01".parse().unwrap());
    }
}
