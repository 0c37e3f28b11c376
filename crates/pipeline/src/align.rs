//! Date alignment and correlation between sentiment and market series.

use quant::stats::correlation;
use types::DailySeries;

/// Pair up two series on their common dates.
///
/// Dates present in only one series are dropped; no value is ever
/// imputed. The pairs come back in ascending date order.
pub fn align(a: &DailySeries, b: &DailySeries) -> Vec<(f64, f64)> {
    a.inner_join(b)
}

/// Pearson correlation over the common dates of two series.
///
/// Returns `None` when fewer than two dates overlap or when either
/// aligned column has zero variance.
pub fn correlate(a: &DailySeries, b: &DailySeries) -> Option<f64> {
    let pairs = align(a, b);
    if pairs.len() < 2 {
        return None;
    }
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    correlation(&xs, &ys)
}

/// Correlate daily sentiment against daily returns.
///
/// The return series is first clipped to the sentiment date range so
/// long price histories do not dominate the overlap scan; the inner
/// join then decides the actual sample.
pub fn sentiment_return_correlation(
    sentiment: &DailySeries,
    returns: &DailySeries,
) -> Option<f64> {
    let (first, last) = match (sentiment.first_date(), sentiment.last_date()) {
        (Some(first), Some(last)) => (first, last),
        _ => return None,
    };
    let clipped = returns.clip(first, last);
    correlate(sentiment, &clipped)
}
