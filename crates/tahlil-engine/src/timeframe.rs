//! Timeframe policy: lookback window and sampling interval per timeframe
//!
//! Three fixed branches, no I/O. The window end is always "now" at call
//! time, so specs are recomputed per call and never cached.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Analysis timeframe selected by the caller
///
/// - `Intraday`: 1 month of 15-minute candles (day traders)
/// - `ShortTerm`: 2 months of hourly candles
/// - `Daily`: 2 years of daily candles (enough history for SMA 200)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Intraday,
    ShortTerm,
    Daily,
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::Daily
    }
}

impl Timeframe {
    /// Lenient parse for API boundaries: accepts the canonical names and
    /// the interval-style aliases; unrecognized or missing input falls
    /// back to the daily policy.
    pub fn from_query(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            Some("intraday" | "15m") => Self::Intraday,
            Some("short_term" | "1h") => Self::ShortTerm,
            _ => Self::Daily,
        }
    }
}

/// Candle sampling interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    /// 15-minute candles
    Min15,
    /// Hourly candles
    Hour1,
    /// Daily candles
    Day1,
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::Min15 => "15m",
            Self::Hour1 => "1h",
            Self::Day1 => "1d",
        };
        write!(f, "{token}")
    }
}

/// Resolved sampling policy for one analysis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeSpec {
    /// Candle sampling interval
    pub interval: Interval,
    /// Start of the lookback window
    pub start: DateTime<Utc>,
    /// End of the lookback window (now at call time)
    pub end: DateTime<Utc>,
}

/// Map a timeframe to its sampling interval and lookback window
pub fn policy_for(timeframe: Timeframe) -> TimeframeSpec {
    let end = Utc::now();

    let (interval, lookback) = match timeframe {
        Timeframe::Intraday => (Interval::Min15, Duration::days(30)),
        Timeframe::ShortTerm => (Interval::Hour1, Duration::days(61)),
        Timeframe::Daily => (Interval::Day1, Duration::days(730)),
    };

    TimeframeSpec {
        interval,
        start: end - lookback,
        end,
    }
}
