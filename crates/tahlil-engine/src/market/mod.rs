//! Market data contracts and the Yahoo Finance implementation
//!
//! The engine depends only on the two narrow traits here; concrete
//! providers are swappable and injected at construction time.

mod yahoo;

pub use yahoo::YahooMarketData;

use crate::error::Result;
use crate::timeframe::TimeframeSpec;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampled period's open/high/low/close price and traded volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    /// Whether all price fields are finite and internally consistent
    /// (providers occasionally return null-ish or inverted candles)
    pub fn is_valid(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_finite())
            && self.high >= self.low
            && self.open >= self.low
            && self.open <= self.high
            && self.close >= self.low
            && self.close <= self.high
    }
}

/// One candidate returned by the remote market search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Exchange ticker
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Exchange tag, when the provider reports one
    pub exchange: Option<String>,
}

/// Provider of historical OHLCV candles
///
/// Returned candles are ordered oldest to newest and already filtered of
/// malformed entries; zero valid candles is an error, not an empty Ok.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch candles for a symbol over the given sampling policy
    async fn fetch_candles(&self, symbol: &str, spec: &TimeframeSpec) -> Result<Vec<Candle>>;
}

/// Remote free-text symbol search
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketSearch: Send + Sync {
    /// Search for securities matching a free-text query, returning at
    /// most `limit` candidates in the provider's relevance order
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}
