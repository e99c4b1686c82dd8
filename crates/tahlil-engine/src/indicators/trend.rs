//! Trend indicators: MACD and Average True Range

use super::{Macd, finite, periods};
use ta::indicators::{AverageTrueRange, MovingAverageConvergenceDivergence};
use ta::{DataItem, Next};

/// MACD 12/26/9 over closes
///
/// Gated on slow+signal closes so the signal line has a full warm-up;
/// below that every component is unavailable.
pub(crate) fn macd(closes: &[f64]) -> Macd {
    let unavailable = Macd {
        macd: None,
        signal: None,
        histogram: None,
    };

    if closes.len() < periods::MACD_SLOW + periods::MACD_SIGNAL {
        return unavailable;
    }

    let Ok(mut indicator) = MovingAverageConvergenceDivergence::new(
        periods::MACD_FAST,
        periods::MACD_SLOW,
        periods::MACD_SIGNAL,
    ) else {
        return unavailable;
    };

    let mut last = None;
    for &close in closes {
        last = Some(indicator.next(close));
    }

    match last {
        Some(output) => Macd {
            macd: finite(output.macd),
            signal: finite(output.signal),
            histogram: finite(output.histogram),
        },
        None => unavailable,
    }
}

/// Average True Range, period 14
///
/// Needs period+1 bars so the first true range has a previous close.
pub(crate) fn atr(bars: &[DataItem]) -> Option<f64> {
    if bars.len() < periods::ATR + 1 {
        return None;
    }

    let mut indicator = AverageTrueRange::new(periods::ATR).ok()?;
    let mut last = None;
    for bar in bars {
        last = Some(indicator.next(bar));
    }
    last.and_then(finite)
}
