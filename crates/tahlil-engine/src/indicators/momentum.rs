//! Momentum oscillators: RSI, MFI, CCI, and the stochastic oscillator

use super::{finite, periods};
use crate::market::Candle;
use ta::indicators::{
    CommodityChannelIndex, Maximum, Minimum, MoneyFlowIndex, RelativeStrengthIndex,
    SimpleMovingAverage,
};
use ta::{DataItem, Next};

/// Relative Strength Index over closes, period 14
///
/// Needs period+1 closes for the first price change window.
pub(crate) fn rsi(closes: &[f64]) -> Option<f64> {
    if closes.len() < periods::RSI + 1 {
        return None;
    }

    let mut indicator = RelativeStrengthIndex::new(periods::RSI).ok()?;
    let mut last = None;
    for &close in closes {
        last = Some(indicator.next(close));
    }
    last.and_then(finite)
}

/// Money Flow Index, period 14: a volume-weighted RSI over typical price
pub(crate) fn mfi(bars: &[DataItem]) -> Option<f64> {
    if bars.len() < periods::MFI + 1 {
        return None;
    }

    let mut indicator = MoneyFlowIndex::new(periods::MFI).ok()?;
    let mut last = None;
    for bar in bars {
        last = Some(indicator.next(bar));
    }
    last.and_then(finite)
}

/// Commodity Channel Index, period 20: typical-price deviation from its mean
pub(crate) fn cci(bars: &[DataItem]) -> Option<f64> {
    if bars.len() < periods::CCI {
        return None;
    }

    let mut indicator = CommodityChannelIndex::new(periods::CCI).ok()?;
    let mut last = None;
    for bar in bars {
        last = Some(indicator.next(bar));
    }
    last.and_then(finite)
}

/// Stochastic oscillator: raw %K over the 14-period high/low range and
/// %D as its 3-period simple moving average
///
/// A flat 14-period range makes %K undefined for that sample; the tail
/// filter turns that into "unavailable" rather than a guessed value.
pub(crate) fn stochastic(candles: &[Candle]) -> (Option<f64>, Option<f64>) {
    if candles.len() < periods::STOCH_K {
        return (None, None);
    }

    let Some(k_series) = raw_k_series(candles) else {
        return (None, None);
    };

    let k = k_series.last().copied().and_then(finite);

    let d = if candles.len() >= periods::STOCH_K + periods::STOCH_D - 1 {
        let mut sma = match SimpleMovingAverage::new(periods::STOCH_D) {
            Ok(sma) => sma,
            Err(_) => return (k, None),
        };
        let mut last = None;
        for &value in &k_series {
            last = Some(sma.next(value));
        }
        last.and_then(finite)
    } else {
        None
    };

    (k, d)
}

fn raw_k_series(candles: &[Candle]) -> Option<Vec<f64>> {
    let mut highest = Maximum::new(periods::STOCH_K).ok()?;
    let mut lowest = Minimum::new(periods::STOCH_K).ok()?;

    Some(
        candles
            .iter()
            .map(|c| {
                let high = highest.next(c.high);
                let low = lowest.next(c.low);
                (c.close - low) / (high - low) * 100.0
            })
            .collect(),
    )
}
