//! OHLCV stock CSV loading.

use std::path::Path;

use tracing::debug;
use types::PriceBar;

use crate::schema::{cell, parse_date, parse_number, require_column};
use crate::IngestError;

/// Load daily price bars from a CSV file.
///
/// Required columns (matched case-insensitively): `date`, `open`,
/// `high`, `low`, `close`, `volume`. Dates must be strictly ascending
/// and unique; the rest of the pipeline relies on that ordering for
/// differencing and windowing, so violations fail the load.
pub fn load_stock(path: impl AsRef<Path>) -> Result<Vec<PriceBar>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let date_idx = require_column(&headers, "date")?;
    let open_idx = require_column(&headers, "open")?;
    let high_idx = require_column(&headers, "high")?;
    let low_idx = require_column(&headers, "low")?;
    let close_idx = require_column(&headers, "close")?;
    let volume_idx = require_column(&headers, "volume")?;

    let mut bars: Vec<PriceBar> = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let row = row + 2;

        let bar = PriceBar {
            date: parse_date(cell(&record, date_idx), row)?,
            open: parse_number(cell(&record, open_idx), row, "open")?,
            high: parse_number(cell(&record, high_idx), row, "high")?,
            low: parse_number(cell(&record, low_idx), row, "low")?,
            close: parse_number(cell(&record, close_idx), row, "close")?,
            volume: parse_number(cell(&record, volume_idx), row, "volume")?,
        };

        if let Some(prev) = bars.last() {
            if bar.date <= prev.date {
                return Err(IngestError::OutOfOrderDates {
                    row,
                    date: bar.date.to_string(),
                });
            }
        }
        bars.push(bar);
    }

    debug!(rows = bars.len(), "loaded price bars");
    Ok(bars)
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
    fn test_load_stock_basic() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-01,100.0,105.0,99.0,104.0,10000\n\
             2024-01-02,104.0,110.0,103.0,110.0,12000\n",
        );

        let bars = load_stock(file.path()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 104.0);
        assert_eq!(bars[1].volume, 12_000);
    }

    #[test]
    fn test_load_stock_case_insensitive_headers() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-01,1,2,0.5,1.5,100\n",
        );

        let bars = load_stock(file.path()).unwrap();
        assert_eq!(bars[0].close, 1.5);
    }

    #[test]
    fn test_load_stock_missing_column() {
        let file = write_csv("date,open,high,low,volume\n2024-01-01,1,2,0.5,100\n");

        match load_stock(file.path()) {
            Err(IngestError::MissingColumn { column }) => assert_eq!(column, "close"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_stock_rejects_out_of_order_dates() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-02,1,2,0.5,1.5,100\n\
             2024-01-01,1,2,0.5,1.5,100\n",
        );

        assert!(matches!(
            load_stock(file.path()),
            Err(IngestError::OutOfOrderDates { row: 3, .. })
        ));
    }

    #[test]
    fn test_load_stock_rejects_duplicate_dates() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-01,1,2,0.5,1.5,100\n\
             2024-01-01,1,2,0.5,1.6,100\n",
        );

        assert!(matches!(
            load_stock(file.path()),
            Err(IngestError::OutOfOrderDates { .. })
        ));
    }

    #[test]
    fn test_load_stock_bad_number() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-01,1,2,0.5,n/a,100\n",
        );

        match load_stock(file.path()) {
            Err(IngestError::InvalidNumber { column, .. }) => assert_eq!(column, "close"),
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }
}
