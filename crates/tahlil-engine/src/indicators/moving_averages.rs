//! Simple and exponential moving average families

use super::{MovingAverages, finite, periods};
use ta::Next;
use ta::indicators::{ExponentialMovingAverage, SimpleMovingAverage};

/// Last SMA value over the series, unavailable below the period
pub(crate) fn sma_last(values: &[f64], period: usize) -> Option<f64> {
    if values.len() < period {
        return None;
    }

    let mut indicator = SimpleMovingAverage::new(period).ok()?;
    let mut last = None;
    for &value in values {
        last = Some(indicator.next(value));
    }
    last.and_then(finite)
}

/// Last EMA value over the series, unavailable below the period
pub(crate) fn ema_last(values: &[f64], period: usize) -> Option<f64> {
    if values.len() < period {
        return None;
    }

    let mut indicator = ExponentialMovingAverage::new(period).ok()?;
    let mut last = None;
    for &value in values {
        last = Some(indicator.next(value));
    }
    last.and_then(finite)
}

/// The 10/20/50/100/200 SMA and EMA families over closes
pub(crate) fn families(closes: &[f64]) -> MovingAverages {
    let [p10, p20, p50, p100, p200] = periods::MA;

    MovingAverages {
        sma10: sma_last(closes, p10),
        sma20: sma_last(closes, p20),
        sma50: sma_last(closes, p50),
        sma100: sma_last(closes, p100),
        sma200: sma_last(closes, p200),
        ema10: ema_last(closes, p10),
        ema20: ema_last(closes, p20),
        ema50: ema_last(closes, p50),
        ema100: ema_last(closes, p100),
        ema200: ema_last(closes, p200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_matches_window_mean() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();

        // Mean of 6..=10
        assert_eq!(sma_last(&values, 5), Some(8.0));
        // Mean of the whole series
        assert_eq!(sma_last(&values, 10), Some(5.5));
    }

    #[test]
    fn test_gates() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(sma_last(&values, 4), None);
        assert_eq!(ema_last(&values, 4), None);
        assert!(ema_last(&values, 3).is_some());
    }

    #[test]
    fn test_families_partial_availability() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + f64::from(i)).collect();
        let ma = families(&closes);

        assert!(ma.sma10.is_some());
        assert!(ma.sma20.is_some());
        assert_eq!(ma.sma50, None);
        assert_eq!(ma.sma100, None);
        assert_eq!(ma.sma200, None);
        assert!(ma.ema10.is_some());
        assert_eq!(ma.ema200, None);
    }

    #[test]
    fn test_constant_series_averages_to_itself() {
        let closes = vec![42.0; 60];
        let ma = families(&closes);

        assert_eq!(ma.sma50, Some(42.0));
        let ema50 = ma.ema50.expect("available");
        assert!((ema50 - 42.0).abs() < 1e-9);
    }
}
