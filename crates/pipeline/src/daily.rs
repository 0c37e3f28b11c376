//! Per-day aggregation of headline sentiment scores.

use types::{DailySeries, Date};

/// Collapse per-headline polarity scores into one mean score per date.
///
/// Input order does not matter; the output series is date-ordered.
/// Dates with no headlines simply do not appear in the output.
pub fn aggregate_daily_sentiment(scores: &[(Date, f64)]) -> DailySeries {
    let mut sums: std::collections::BTreeMap<Date, (f64, u64)> = std::collections::BTreeMap::new();
    for &(date, score) in scores {
        let entry = sums.entry(date).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(date, (sum, count))| (date, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Date {
        chrono::NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_aggregate_means_per_date() {
        let scores = vec![(day(1), 0.5), (day(1), -0.1), (day(2), 0.3)];
        let series = aggregate_daily_sentiment(&scores);

        assert_eq!(series.len(), 2);
        assert!((series.get(day(1)).unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(series.get(day(2)), Some(0.3));
    }

    #[test]
    fn test_aggregate_unordered_input() {
        let scores = vec![(day(3), 0.1), (day(1), 0.2), (day(2), 0.3)];
        let series = aggregate_daily_sentiment(&scores);

        let dates: Vec<Date> = series.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
    }

    #[test]
    fn test_aggregate_mean_bounded_by_extremes() {
        let scores = vec![(day(1), -0.8), (day(1), 0.2), (day(1), 0.6)];
        let series = aggregate_daily_sentiment(&scores);
        let mean = series.get(day(1)).unwrap();

        assert!(mean >= -0.8 && mean <= 0.6);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_daily_sentiment(&[]).is_empty());
    }
}
