//! Yahoo Finance market data and search client

use super::{Candle, MarketDataProvider, MarketSearch, SearchHit};
use crate::error::{AnalysisError, Result};
use crate::timeframe::{Interval, TimeframeSpec};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

/// Market data and search backed by Yahoo Finance
pub struct YahooMarketData {}

impl YahooMarketData {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    fn connector() -> Result<yahoo::YahooConnector> {
        yahoo::YahooConnector::new().map_err(|e| {
            warn!(error = %e, "failed to construct Yahoo connector");
            AnalysisError::DataFetch(
                "The market data provider is currently unavailable.".to_string(),
            )
        })
    }
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

/// Interval token understood by the Yahoo chart API
/// (hourly data is requested as "60m"; "1h" is not a valid chart token)
fn interval_token(interval: Interval) -> &'static str {
    match interval {
        Interval::Min15 => "15m",
        Interval::Hour1 => "60m",
        Interval::Day1 => "1d",
    }
}

fn to_offset(ts: DateTime<Utc>) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(ts.timestamp()).map_err(|e| {
        warn!(error = %e, "invalid window timestamp");
        AnalysisError::DataFetch("Invalid analysis time window.".to_string())
    })
}

#[async_trait]
impl MarketDataProvider for YahooMarketData {
    async fn fetch_candles(&self, symbol: &str, spec: &TimeframeSpec) -> Result<Vec<Candle>> {
        let provider = Self::connector()?;
        let token = interval_token(spec.interval);

        debug!(symbol, interval = token, start = %spec.start, end = %spec.end, "fetching candles");

        let response = provider
            .get_quote_history_interval(symbol, to_offset(spec.start)?, to_offset(spec.end)?, token)
            .await
            .map_err(|e| {
                warn!(symbol, error = %e, "market data fetch failed");
                AnalysisError::DataFetch(format!(
                    "Failed to fetch market data for {symbol}. The provider may be unavailable or the symbol unknown."
                ))
            })?;

        let quotes = response.quotes().map_err(|e| {
            warn!(symbol, error = %e, "market data response had no quotes");
            AnalysisError::DataFetch(format!(
                "No historical data available for {symbol}. The stock may be delisted or the symbol is incorrect."
            ))
        })?;

        let candles: Vec<Candle> = quotes
            .iter()
            .map(|q| Candle {
                timestamp: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
            .filter(Candle::is_valid)
            .collect();

        if candles.is_empty() {
            return Err(AnalysisError::DataFetch(format!(
                "No historical data available for {symbol}. The stock may be delisted or the symbol is incorrect."
            )));
        }

        debug!(symbol, count = candles.len(), "fetched candles");
        Ok(candles)
    }
}

#[async_trait]
impl MarketSearch for YahooMarketData {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let provider = Self::connector()?;

        debug!(query, limit, "searching Yahoo Finance");

        let results = provider.search_ticker(query).await.map_err(|e| {
            warn!(query, error = %e, "market search failed");
            AnalysisError::DataFetch(
                "Market search is currently unavailable. Please try again later.".to_string(),
            )
        })?;

        let hits = results
            .quotes
            .into_iter()
            .take(limit)
            .map(|q| {
                let name = if q.short_name.is_empty() {
                    if q.long_name.is_empty() {
                        q.symbol.clone()
                    } else {
                        q.long_name.clone()
                    }
                } else {
                    q.short_name.clone()
                };
                SearchHit {
                    symbol: q.symbol,
                    name,
                    exchange: if q.exchange.is_empty() {
                        None
                    } else {
                        Some(q.exchange)
                    },
                }
            })
            .collect();

        Ok(hits)
    }
}
