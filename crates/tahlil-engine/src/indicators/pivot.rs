//! Classic pivot points from the last completed candle

use super::{PivotPoints, round2};
use crate::market::Candle;

/// Pivot point and support/resistance levels
///
/// Uses the second-to-last candle when at least two exist (the latest
/// candle may still be forming) and the last candle otherwise. The
/// caller guarantees a non-empty sequence.
pub(crate) fn pivot_points(candles: &[Candle]) -> PivotPoints {
    let index = if candles.len() >= 2 {
        candles.len() - 2
    } else {
        candles.len() - 1
    };
    let candle = &candles[index];

    let pp = (candle.high + candle.low + candle.close) / 3.0;
    let r1 = 2.0 * pp - candle.low;
    let s1 = 2.0 * pp - candle.high;
    let r2 = pp + (candle.high - candle.low);
    let s2 = pp - (candle.high - candle.low);

    PivotPoints {
        pp: round2(pp),
        r1: round2(r1),
        r2: round2(r2),
        s1: round2(s1),
        s2: round2(s2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn candle(high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp: Utc::now(),
            open: close,
            high,
            low,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_pivot_identity() {
        // H=120, L=100, C=110 in the completed candle
        let candles = vec![candle(120.0, 100.0, 110.0), candle(125.0, 110.0, 118.0)];
        let pivots = pivot_points(&candles);

        assert_eq!(pivots.pp, 110.0);
        assert_eq!(pivots.r1, 120.0);
        assert_eq!(pivots.s1, 100.0);
        assert_eq!(pivots.r2, 130.0);
        assert_eq!(pivots.s2, 90.0);
    }

    #[test]
    fn test_second_to_last_candle_is_used() {
        let completed = candle(120.0, 100.0, 110.0);
        let in_progress = candle(200.0, 150.0, 180.0);

        let pivots = pivot_points(&[completed, in_progress]);
        assert_eq!(pivots.pp, 110.0);
    }

    #[test]
    fn test_single_candle_fallback() {
        let pivots = pivot_points(&[candle(120.0, 100.0, 110.0)]);
        assert_eq!(pivots.pp, 110.0);
    }

    #[test]
    fn test_rounding() {
        // H+L+C = 10 -> pp = 3.333...
        let pivots = pivot_points(&[candle(4.0, 2.0, 4.0), candle(4.0, 2.0, 3.0)]);
        assert_eq!(pivots.pp, 3.33);
    }
}
