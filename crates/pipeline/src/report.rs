//! Report assembly: run the text and market analyses end to end.

use serde::Serialize;
use tracing::info;

use news::{extract_keywords, polarity, KeywordConfig, KeywordCount};
use quant::{daily_returns, rolling_volatility, Macd, Rsi, SeriesIndicator, Sma};
use types::{DailySeries, HeadlineRecord, MacdSeries, PriceBar};

use crate::align::sentiment_return_correlation;
use crate::config::AnalysisConfig;
use crate::daily::aggregate_daily_sentiment;
use crate::summary::{publisher_counts, HeadlineStats, PublisherCount};

/// Results of the text side of the analysis.
#[derive(Debug, Clone, Serialize)]
pub struct EdaReport {
    /// Headline length statistics.
    pub headline_stats: HeadlineStats,
    /// Most prolific publishers, descending.
    pub top_publishers: Vec<PublisherCount>,
    /// Most frequent keywords, descending.
    pub top_keywords: Vec<KeywordCount>,
    /// Mean sentiment polarity per publication date.
    pub daily_sentiment: DailySeries,
}

/// Results of the market side of the analysis.
#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    /// Close-to-close daily returns.
    pub daily_returns: DailySeries,
    /// Rolling sample standard deviation of daily returns.
    pub volatility: DailySeries,
    /// Simple moving average of closing prices.
    pub sma: DailySeries,
    /// Relative strength index.
    pub rsi: DailySeries,
    /// MACD line, signal line and histogram.
    pub macd: MacdSeries,
}

/// Combined output of one full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub eda: EdaReport,
    pub market: MarketReport,
    /// Pearson correlation between daily sentiment and daily returns
    /// over their common dates, when computable.
    pub correlation: Option<f64>,
}

/// Run the text analysis: headline stats, publishers, keywords and
/// per-day sentiment.
pub fn run_eda(records: &[HeadlineRecord], config: &AnalysisConfig) -> EdaReport {
    let headlines: Vec<&str> = records.iter().map(|r| r.headline.as_str()).collect();
    let keyword_config = KeywordConfig::new().top_n(config.top_n);

    let scores: Vec<_> = records
        .iter()
        .map(|r| (r.date, polarity(&r.headline)))
        .collect();
    let daily_sentiment = aggregate_daily_sentiment(&scores);

    info!(
        headlines = records.len(),
        sentiment_days = daily_sentiment.len(),
        "text analysis complete"
    );

    EdaReport {
        headline_stats: HeadlineStats::from_records(records),
        top_publishers: publisher_counts(records, config.top_n),
        top_keywords: extract_keywords(&headlines, &keyword_config),
        daily_sentiment,
    }
}

/// Run the market analysis: returns, volatility and indicators.
pub fn run_market(bars: &[PriceBar], config: &AnalysisConfig) -> MarketReport {
    let report = MarketReport {
        daily_returns: daily_returns(bars),
        volatility: rolling_volatility(bars, config.volatility_window),
        sma: Sma::new(config.sma_window).series(bars),
        rsi: Rsi::new(config.rsi_window).series(bars),
        macd: Macd::new(config.macd_fast, config.macd_slow, config.macd_signal)
            .macd_series(bars),
    };

    info!(
        bars = bars.len(),
        return_days = report.daily_returns.len(),
        "market analysis complete"
    );
    report
}

/// Correlate the two report halves.
///
/// `None` when the sentiment and return series share fewer than two
/// dates, or when either aligned column has zero variance.
pub fn run_correlation(eda: &EdaReport, market: &MarketReport) -> Option<f64> {
    sentiment_return_correlation(&eda.daily_sentiment, &market.daily_returns)
}

impl AnalysisReport {
    /// Run the full pipeline over loaded headlines and price bars.
    pub fn build(
        records: &[HeadlineRecord],
        bars: &[PriceBar],
        config: &AnalysisConfig,
    ) -> Self {
        let eda = run_eda(records, config);
        let market = run_market(bars, config);
        let correlation = run_correlation(&eda, &market);

        Self {
            eda,
            market,
            correlation,
        }
    }
}
