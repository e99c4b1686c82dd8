//! Deterministic rule-based report
//!
//! Used whenever the narrative collaborator is unreachable or
//! uncredentialed. A majority vote over three signals (RSI oversold,
//! MACD histogram sign, price vs SMA 50) decides the recommendation;
//! an unavailable signal counts toward neither direction.

use super::prompt::{fmt_value, rsi_hint};
use super::{Confidence, NarrativeReport, Recommendation};
use crate::config::ReportLanguage;
use crate::indicators::IndicatorSet;

/// Build the rule-based report from the indicator set alone
pub fn deterministic_report(
    indicators: &IndicatorSet,
    language: ReportLanguage,
) -> NarrativeReport {
    let rsi = indicators.rsi;
    let histogram = indicators.macd.histogram;
    let sma50 = indicators.moving_averages.sma50;
    let price = indicators.current_price;

    let bullish = [
        rsi.map(|r| r < 30.0),
        histogram.map(|h| h > 0.0),
        sma50.map(|m| price > m),
    ]
    .iter()
    .filter(|signal| **signal == Some(true))
    .count();

    let bearish = [
        rsi.map(|r| r > 70.0),
        histogram.map(|h| h < 0.0),
        sma50.map(|m| price < m),
    ]
    .iter()
    .filter(|signal| **signal == Some(true))
    .count();

    let (recommendation, confidence) = if bullish >= 2 {
        (
            Recommendation::Buy,
            if bullish == 3 {
                Confidence::High
            } else {
                Confidence::Medium
            },
        )
    } else if bearish >= 2 {
        (
            Recommendation::Sell,
            if bearish == 3 {
                Confidence::High
            } else {
                Confidence::Medium
            },
        )
    } else {
        (Recommendation::Hold, Confidence::Medium)
    };

    match language {
        ReportLanguage::Arabic => arabic_report(indicators, recommendation, confidence),
        ReportLanguage::English => english_report(indicators, recommendation, confidence),
    }
}

fn arabic_report(
    ind: &IndicatorSet,
    recommendation: Recommendation,
    confidence: Confidence,
) -> NarrativeReport {
    let pivots = &ind.pivot_points;
    let verdict = match recommendation {
        Recommendation::Buy => "شراء",
        Recommendation::Sell => "بيع",
        Recommendation::Hold => "انتظار",
    };

    let analysis = format!(
        "تحليل تلقائي (المحلل الذكي غير متاح):\n\n\
         السعر الحالي: {} جنيه\n\
         RSI: {} {}\n\
         MACD Histogram: {}\n\n\
         مستويات مهمة:\n\
         - دعم 1: {}\n\
         - مقاومة 1: {}\n\n\
         التوصية: {}",
        ind.current_price,
        fmt_value(ind.rsi),
        rsi_hint(ind.rsi, ReportLanguage::Arabic),
        fmt_value(ind.macd.histogram),
        pivots.s1,
        pivots.r1,
        verdict,
    );

    let trend_analysis = match ind.moving_averages.sma200 {
        Some(sma200) => format!(
            "السعر {} متوسط 200 يوم",
            if ind.current_price > sma200 {
                "فوق"
            } else {
                "تحت"
            }
        ),
        None => "غير متاح".to_string(),
    };

    NarrativeReport {
        recommendation,
        confidence,
        analysis,
        trend_analysis,
        momentum_analysis: format!("RSI: {}", fmt_value(ind.rsi)),
        support_resistance: format!("PP: {}, S1: {}, R1: {}", pivots.pp, pivots.s1, pivots.r1),
        risk_assessment: "يُنصح باستخدام وقف الخسارة".to_string(),
    }
}

fn english_report(
    ind: &IndicatorSet,
    recommendation: Recommendation,
    confidence: Confidence,
) -> NarrativeReport {
    let pivots = &ind.pivot_points;

    let analysis = format!(
        "Automatic analysis (narrative collaborator unavailable):\n\n\
         Current price: {} EGP\n\
         RSI: {} {}\n\
         MACD Histogram: {}\n\n\
         Key levels:\n\
         - Support 1: {}\n\
         - Resistance 1: {}\n\n\
         Recommendation: {}",
        ind.current_price,
        fmt_value(ind.rsi),
        rsi_hint(ind.rsi, ReportLanguage::English),
        fmt_value(ind.macd.histogram),
        pivots.s1,
        pivots.r1,
        recommendation.as_str(),
    );

    let trend_analysis = match ind.moving_averages.sma200 {
        Some(sma200) => format!(
            "Price is {} the 200-period average",
            if ind.current_price > sma200 {
                "above"
            } else {
                "below"
            }
        ),
        None => "Not available".to_string(),
    };

    NarrativeReport {
        recommendation,
        confidence,
        analysis,
        trend_analysis,
        momentum_analysis: format!("RSI: {}", fmt_value(ind.rsi)),
        support_resistance: format!("PP: {}, S1: {}, R1: {}", pivots.pp, pivots.s1, pivots.r1),
        risk_assessment: "Manage risk and use a stop loss".to_string(),
    }
}
