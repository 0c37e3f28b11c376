//! End-to-end pipeline tests over small hand-built datasets.

use pipeline::{AnalysisConfig, AnalysisReport};
use types::{Date, HeadlineRecord, PriceBar};

fn day(d: u32) -> Date {
    chrono::NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn bar(d: u32, close: f64) -> PriceBar {
    PriceBar::new(day(d), close, close * 1.01, close * 0.99, close, 10_000)
}

fn record(headline: &str, d: u32) -> HeadlineRecord {
    HeadlineRecord::new(headline, day(d), "Reuters", "XYZ")
}

#[test]
fn two_headlines_three_bars_yields_no_correlation() {
    // The first bar has no prior close, so only one sentiment date
    // overlaps a defined return. One pair is not enough to correlate.
    let records = vec![
        record("XYZ beats earnings expectations", 1),
        record("XYZ misses revenue targets", 2),
    ];
    let bars = vec![bar(1, 100.0), bar(2, 110.0), bar(3, 99.0)];

    let report = AnalysisReport::build(&records, &bars, &AnalysisConfig::default());

    assert_eq!(report.eda.headline_stats.count, 2);
    assert_eq!(report.market.daily_returns.len(), 2);
    assert_eq!(report.correlation, None);
}

#[test]
fn sentiment_tracking_returns_correlates_positively() {
    let records = vec![
        record("XYZ beats earnings expectations", 2),
        record("XYZ misses revenue targets", 3),
        record("XYZ beats analyst estimates", 4),
        record("XYZ misses quarterly guidance", 5),
    ];
    // Up on good news days, down on bad ones.
    let bars = vec![
        bar(1, 100.0),
        bar(2, 105.0),
        bar(3, 98.0),
        bar(4, 103.0),
        bar(5, 96.0),
    ];

    let report = AnalysisReport::build(&records, &bars, &AnalysisConfig::default());
    let r = report.correlation.expect("four overlapping dates");
    assert!(r > 0.9, "expected strong positive correlation, got {r}");
}

#[test]
fn contrarian_prices_correlate_negatively() {
    let records = vec![
        record("XYZ beats earnings expectations", 2),
        record("XYZ misses revenue targets", 3),
        record("XYZ beats analyst estimates", 4),
    ];
    // Prices move against the headlines.
    let bars = vec![bar(1, 100.0), bar(2, 95.0), bar(3, 102.0), bar(4, 97.0)];

    let report = AnalysisReport::build(&records, &bars, &AnalysisConfig::default());
    let r = report.correlation.expect("three overlapping dates");
    assert!(r < -0.9, "expected strong negative correlation, got {r}");
}

#[test]
fn news_outside_price_history_is_ignored() {
    let records = vec![
        record("XYZ beats earnings expectations", 20),
        record("XYZ misses revenue targets", 21),
    ];
    let bars = vec![bar(1, 100.0), bar(2, 101.0), bar(3, 102.0)];

    let report = AnalysisReport::build(&records, &bars, &AnalysisConfig::default());
    assert_eq!(report.correlation, None);
}

#[test]
fn report_serializes_to_json() {
    let records = vec![record("XYZ beats earnings expectations", 2)];
    let bars = vec![bar(1, 100.0), bar(2, 105.0)];

    let report = AnalysisReport::build(&records, &bars, &AnalysisConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["eda"]["headline_stats"]["count"].is_number());
    assert!(json["market"]["daily_returns"].is_object());
    assert!(json["correlation"].is_null());
}
