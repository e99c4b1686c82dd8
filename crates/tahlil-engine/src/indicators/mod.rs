//! Technical indicator calculator
//!
//! Pure, deterministic computation over an OHLCV candle sequence:
//!
//! - Momentum: RSI, MFI, CCI, Stochastic %K/%D
//! - Trend: MACD (line/signal/histogram), ATR
//! - Moving averages: SMA and EMA over 10/20/50/100/200
//! - Support/resistance: classic pivot points
//!
//! Streaming `ta` indicators produce the series; only the last value of
//! each is retained. Every indicator is gated on its required lookback:
//! too few candles resolves to `None` ("unavailable"), never to zero and
//! never to an error, and one unavailable indicator does not abort the
//! rest of the set.

mod momentum;
mod moving_averages;
mod pivot;
mod trend;

use crate::error::{AnalysisError, Result};
use crate::market::Candle;
use serde::{Deserialize, Serialize};
use ta::DataItem;
use tracing::debug;

/// Fixed indicator periods
pub(crate) mod periods {
    pub const RSI: usize = 14;
    pub const MFI: usize = 14;
    pub const ATR: usize = 14;
    pub const CCI: usize = 20;
    pub const MACD_FAST: usize = 12;
    pub const MACD_SLOW: usize = 26;
    pub const MACD_SIGNAL: usize = 9;
    pub const STOCH_K: usize = 14;
    pub const STOCH_D: usize = 3;
    pub const MA: [usize; 5] = [10, 20, 50, 100, 200];
}

/// MACD line, signal line, and histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// Stochastic oscillator %K and %D
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stochastic {
    pub k: Option<f64>,
    pub d: Option<f64>,
}

/// Simple and exponential moving averages over the fixed period family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma10: Option<f64>,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma100: Option<f64>,
    pub sma200: Option<f64>,
    pub ema10: Option<f64>,
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub ema100: Option<f64>,
    pub ema200: Option<f64>,
}

/// Classic pivot point with two resistance and two support levels,
/// rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotPoints {
    pub pp: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

/// Complete indicator battery for one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub current_price: f64,
    pub previous_close: f64,
    pub price_change: f64,
    /// Unavailable when the previous close is zero
    pub price_change_percent: Option<f64>,

    // Momentum
    pub rsi: Option<f64>,
    pub mfi: Option<f64>,
    pub cci: Option<f64>,
    pub stochastic: Stochastic,

    // Trend
    pub macd: Macd,
    pub atr: Option<f64>,

    // Moving averages
    pub moving_averages: MovingAverages,

    // Support/resistance
    pub pivot_points: PivotPoints,
}

/// Compute the full indicator set for a candle sequence
///
/// The sequence must be ordered oldest to newest. Malformed candles are
/// dropped first; fewer than 2 surviving candles is `InsufficientData`.
pub fn compute(candles: &[Candle]) -> Result<IndicatorSet> {
    let candles: Vec<Candle> = candles.iter().copied().filter(Candle::is_valid).collect();

    if candles.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            got: candles.len(),
            need: 2,
        });
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let bars: Vec<DataItem> = candles.iter().filter_map(to_bar).collect();

    let current_price = closes[closes.len() - 1];
    let previous_close = closes[closes.len() - 2];
    let change = current_price - previous_close;

    let price_change_percent = if previous_close == 0.0 {
        None
    } else {
        Some(round2(change / previous_close * 100.0))
    };

    debug!(
        candles = candles.len(),
        current_price, previous_close, "computing indicators"
    );

    let (k, d) = momentum::stochastic(&candles);

    Ok(IndicatorSet {
        current_price: round2(current_price),
        previous_close: round2(previous_close),
        price_change: round2(change),
        price_change_percent,

        rsi: momentum::rsi(&closes),
        mfi: momentum::mfi(&bars),
        cci: momentum::cci(&bars),
        stochastic: Stochastic { k, d },

        macd: trend::macd(&closes),
        atr: trend::atr(&bars),

        moving_averages: moving_averages::families(&closes),

        pivot_points: pivot::pivot_points(&candles),
    })
}

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keep only a finite last value
pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn to_bar(candle: &Candle) -> Option<DataItem> {
    DataItem::builder()
        .open(candle.open)
        .high(candle.high)
        .low(candle.low)
        .close(candle.close)
        .volume(candle.volume as f64)
        .build()
        .ok()
}


#[cfg(test)]
mod tests {
    use super::testing::make_candles;
    use super::*;
    use crate::error::AnalysisError;
    use chrono::Utc;

    #[test]
    fn test_insufficient_data() {
        let err = compute(&make_candles(1)).expect_err("must fail");
        assert!(matches!(
            err,
            AnalysisError::InsufficientData { got: 1, need: 2 }
        ));

        let err = compute(&[]).expect_err("must fail");
        assert!(matches!(
            err,
            AnalysisError::InsufficientData { got: 0, need: 2 }
        ));
    }

    #[test]
    fn test_malformed_candles_are_filtered_before_the_length_check() {
        let mut candles = make_candles(3);
        candles[0].high = f64::NAN;
        candles[1].low = candles[1].high + 1.0;

        let err = compute(&candles).expect_err("must fail");
        assert!(matches!(
            err,
            AnalysisError::InsufficientData { got: 1, need: 2 }
        ));
    }

    #[test]
    fn test_full_history_populates_every_indicator() {
        let set = compute(&make_candles(250)).expect("computes");

        assert!(set.rsi.is_some());
        assert!(set.mfi.is_some());
        assert!(set.cci.is_some());
        assert!(set.stochastic.k.is_some());
        assert!(set.stochastic.d.is_some());
        assert!(set.macd.macd.is_some());
        assert!(set.macd.signal.is_some());
        assert!(set.macd.histogram.is_some());
        assert!(set.atr.is_some());

        let ma = set.moving_averages;
        for value in [
            ma.sma10, ma.sma20, ma.sma50, ma.sma100, ma.sma200, ma.ema10, ma.ema20, ma.ema50,
            ma.ema100, ma.ema200,
        ] {
            assert!(value.is_some());
        }
    }

    #[test]
    fn test_every_field_is_finite_or_unavailable() {
        for n in [2, 5, 15, 30, 60, 120, 250] {
            let set = compute(&make_candles(n)).expect("computes");

            assert!(set.current_price.is_finite());
            assert!(set.previous_close.is_finite());
            assert!(set.price_change.is_finite());

            let optionals = [
                set.price_change_percent,
                set.rsi,
                set.mfi,
                set.cci,
                set.stochastic.k,
                set.stochastic.d,
                set.macd.macd,
                set.macd.signal,
                set.macd.histogram,
                set.atr,
                set.moving_averages.sma10,
                set.moving_averages.sma200,
                set.moving_averages.ema10,
                set.moving_averages.ema200,
            ];
            for value in optionals.into_iter().flatten() {
                assert!(value.is_finite(), "n={n} produced a non-finite value");
            }

            for level in [
                set.pivot_points.pp,
                set.pivot_points.r1,
                set.pivot_points.r2,
                set.pivot_points.s1,
                set.pivot_points.s2,
            ] {
                assert!(level.is_finite());
            }
        }
    }

    #[test]
    fn test_short_history_leaves_long_lookbacks_unavailable() {
        // 60 candles: the 50-period averages exist, the longer ones do
        // not, and neither aborts the set.
        let set = compute(&make_candles(60)).expect("computes");

        assert!(set.moving_averages.sma50.is_some());
        assert!(set.moving_averages.sma100.is_none());
        assert!(set.moving_averages.sma200.is_none());
        assert!(set.rsi.is_some());
    }

    #[test]
    fn test_unavailable_is_none_not_zero() {
        let set = compute(&make_candles(5)).expect("computes");

        assert_eq!(set.rsi, None);
        assert_eq!(set.mfi, None);
        assert_eq!(set.macd.macd, None);
        assert_eq!(set.moving_averages.sma10, None);
    }

    #[test]
    fn test_bounded_oscillators_stay_in_range() {
        let set = compute(&make_candles(250)).expect("computes");

        for value in [set.rsi, set.mfi, set.stochastic.k, set.stochastic.d]
            .into_iter()
            .flatten()
        {
            assert!((0.0..=100.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn test_macd_histogram_is_line_minus_signal() {
        let set = compute(&make_candles(250)).expect("computes");

        let macd = set.macd.macd.expect("available");
        let signal = set.macd.signal.expect("available");
        let histogram = set.macd.histogram.expect("available");
        assert!((histogram - (macd - signal)).abs() < 1e-9);
    }

    #[test]
    fn test_price_delta_rounding() {
        let first = Candle {
            timestamp: Utc::now(),
            open: 99.0,
            high: 103.0,
            low: 98.0,
            close: 100.0,
            volume: 1_000,
        };
        let second = Candle {
            timestamp: Utc::now(),
            open: 100.0,
            high: 103.0,
            low: 100.0,
            close: 101.236,
            volume: 1_000,
        };

        let set = compute(&[first, second]).expect("computes");
        assert_eq!(set.price_change, 1.24);
        assert_eq!(set.price_change_percent, Some(1.24));
    }

    #[test]
    fn test_zero_previous_close_fails_closed() {
        let zero = Candle {
            timestamp: Utc::now(),
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0,
        };
        let next = Candle {
            timestamp: Utc::now(),
            open: 1.0,
            high: 5.5,
            low: 1.0,
            close: 5.0,
            volume: 100,
        };

        let set = compute(&[zero, next]).expect("computes");
        assert_eq!(set.price_change, 5.0);
        assert_eq!(set.price_change_percent, None);
    }
}
