//! Daily returns and rolling volatility.

use types::{DailySeries, PriceBar};

use crate::stats;

/// Per-bar fractional returns, aligned to the bar index.
///
/// `result[i]` is the return at `bars[i].date`, or `None` when
/// undefined: the first bar has no prior close, and a zero prior close
/// makes the percentage change undefined (never infinite).
fn returns_by_bar(bars: &[PriceBar]) -> Vec<Option<f64>> {
    debug_assert!(
        bars.windows(2).all(|w| w[0].date < w[1].date),
        "price bars must have strictly ascending dates"
    );

    let mut out = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        let value = if i == 0 {
            None
        } else {
            let prev = bars[i - 1].close;
            (prev != 0.0).then(|| (bar.close - prev) / prev)
        };
        out.push(value);
    }
    out
}

/// Daily percentage returns of the closing price.
///
/// The return at date *t* is `(close[t] - close[t-1]) / close[t-1]`,
/// keyed by the later date. The first date is absent (no prior close),
/// as is any date whose prior close is zero.
///
/// Precondition: `bars` sorted by strictly ascending date (enforced at
/// ingestion).
pub fn daily_returns(bars: &[PriceBar]) -> DailySeries {
    bars.iter()
        .zip(returns_by_bar(bars))
        .filter_map(|(bar, ret)| ret.map(|r| (bar.date, r)))
        .collect()
}

/// Rolling sample standard deviation of daily returns.
///
/// The value at date *t* is the sample standard deviation of the
/// `window` return values ending at *t*. Dates whose trailing window
/// is incomplete (including windows spanning an undefined return) are
/// absent; no partial-window approximation is made.
pub fn rolling_volatility(bars: &[PriceBar], window: usize) -> DailySeries {
    assert!(window > 0, "volatility window must be > 0");

    let returns = returns_by_bar(bars);
    let mut out = DailySeries::new();

    for end in window..=returns.len() {
        let slice = &returns[end - window..end];
        if slice.iter().any(Option::is_none) {
            continue;
        }
        let values: Vec<f64> = slice.iter().map(|r| r.unwrap()).collect();
        if let Some(std) = stats::sample_std_dev(&values) {
            out.insert(bars[end - 1].date, std);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Date;

    fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
        let start: Date = "2024-01-01".parse().unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                PriceBar::new(
                    start + chrono::Days::new(i as u64),
                    close,
                    close + 1.0,
                    close - 1.0,
                    close,
                    1_000,
                )
            })
            .collect()
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn test_returns_basic() {
        let bars = make_bars(&[100.0, 110.0, 99.0]);
        let returns = daily_returns(&bars);

        assert_eq!(returns.len(), 2);
        assert!((returns.get(date("2024-01-02")).unwrap() - 0.10).abs() < 1e-9);
        assert!((returns.get(date("2024-01-03")).unwrap() + 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_first_date_has_no_return() {
        let bars = make_bars(&[100.0, 110.0]);
        let returns = daily_returns(&bars);
        assert_eq!(returns.get(date("2024-01-01")), None);
    }

    #[test]
    fn test_zero_prior_close_is_missing_not_infinite() {
        let bars = make_bars(&[100.0, 0.0, 50.0]);
        let returns = daily_returns(&bars);

        // 01-02 is defined (-100%), 01-03 is not (prior close zero).
        assert!((returns.get(date("2024-01-02")).unwrap() + 1.0).abs() < 1e-9);
        assert_eq!(returns.get(date("2024-01-03")), None);
    }

    #[test]
    fn test_constant_price_returns_all_zero() {
        let bars = make_bars(&[50.0; 10]);
        let returns = daily_returns(&bars);

        assert_eq!(returns.len(), 9);
        assert!(returns.values().iter().all(|r| *r == 0.0));
    }

    #[test]
    fn test_constant_price_volatility_zero() {
        let bars = make_bars(&[50.0; 10]);
        let vol = rolling_volatility(&bars, 5);

        assert!(!vol.is_empty());
        assert!(vol.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_volatility_warm_up_absent() {
        let bars = make_bars(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        let vol = rolling_volatility(&bars, 3);

        // First bar has no return; the first full window of 3 returns
        // ends at the fourth bar.
        assert_eq!(vol.first_date(), Some(date("2024-01-04")));
        assert_eq!(vol.len(), 3);
    }

    #[test]
    fn test_volatility_matches_sample_std_of_returns() {
        let bars = make_bars(&[100.0, 110.0, 99.0, 108.9]);
        let vol = rolling_volatility(&bars, 3);

        let rets = [0.10, -0.10, 0.10];
        let expected = stats::sample_std_dev(&rets).unwrap();
        assert!((vol.get(date("2024-01-04")).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_window_too_large() {
        let bars = make_bars(&[100.0, 101.0]);
        assert!(rolling_volatility(&bars, 14).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(daily_returns(&[]).is_empty());
        assert!(rolling_volatility(&[], 14).is_empty());
    }
}
