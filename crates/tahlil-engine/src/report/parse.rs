//! Free-text response parsing, the last-resort adapter
//!
//! The collaborator contract is plain text, so recommendation and
//! confidence are recovered from machine-readable tags near the top of
//! the response and the four subsections by pattern search. Everything
//! here degrades structurally: unrecognized tags become HOLD/MEDIUM,
//! unmatched sections become fixed placeholders. No other module looks
//! at the raw text.

use super::{Confidence, NarrativeReport, Recommendation};
use crate::config::ReportLanguage;
use crate::indicators::IndicatorSet;
use regex::Regex;
use std::sync::LazyLock;

static RECOMMENDATION_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[RECOMMENDATION:\s*([A-Za-z]+)\s*\]").expect("valid regex")
});

static CONFIDENCE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[CONFIDENCE:\s*([A-Za-z]+)\s*\]").expect("valid regex"));

static STRIP_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(?:RECOMMENDATION|CONFIDENCE):[^\]]*\]").expect("valid regex")
});

/// Section headings and placeholders for one report language
struct Lexicon {
    trend: &'static [&'static str],
    momentum: &'static [&'static str],
    support: &'static [&'static str],
    risk: &'static [&'static str],
    trend_placeholder: &'static str,
    momentum_placeholder: &'static str,
    risk_placeholder: &'static str,
}

fn lexicon(language: ReportLanguage) -> Lexicon {
    match language {
        ReportLanguage::Arabic => Lexicon {
            trend: &["تحليل الاتجاه"],
            momentum: &["تحليل الزخم"],
            support: &["مستويات الدعم والمقاومة", "الدعم والمقاومة"],
            risk: &["تقييم المخاطر", "المخاطر"],
            trend_placeholder: "تحليل الاتجاه غير متاح",
            momentum_placeholder: "تحليل الزخم غير متاح",
            risk_placeholder: "يُنصح بإدارة المخاطر واستخدام وقف الخسارة",
        },
        ReportLanguage::English => Lexicon {
            trend: &["Trend Analysis"],
            momentum: &["Momentum Analysis"],
            support: &["Support and Resistance", "Support & Resistance"],
            risk: &["Risk Assessment", "Risk"],
            trend_placeholder: "Trend analysis not available",
            momentum_placeholder: "Momentum analysis not available",
            risk_placeholder: "Manage risk and use a stop loss",
        },
    }
}

/// Parse the collaborator's free text into a structured report
pub(crate) fn parse_response(
    text: &str,
    indicators: &IndicatorSet,
    language: ReportLanguage,
) -> NarrativeReport {
    let recommendation = RECOMMENDATION_TAG
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| match m.as_str().to_ascii_uppercase().as_str() {
            "BUY" => Some(Recommendation::Buy),
            "SELL" => Some(Recommendation::Sell),
            "HOLD" => Some(Recommendation::Hold),
            _ => None,
        })
        .unwrap_or(Recommendation::Hold);

    let confidence = CONFIDENCE_TAG
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| match m.as_str().to_ascii_uppercase().as_str() {
            "HIGH" => Some(Confidence::High),
            "MEDIUM" => Some(Confidence::Medium),
            "LOW" => Some(Confidence::Low),
            _ => None,
        })
        .unwrap_or(Confidence::Medium);

    let clean = STRIP_TAGS.replace_all(text, "").trim().to_string();

    let lex = lexicon(language);
    let pivots = &indicators.pivot_points;

    let trend_analysis = first_section(&clean, lex.trend)
        .unwrap_or_else(|| lex.trend_placeholder.to_string());
    let momentum_analysis = first_section(&clean, lex.momentum)
        .unwrap_or_else(|| lex.momentum_placeholder.to_string());
    let support_resistance = first_section(&clean, lex.support).unwrap_or_else(|| {
        format!("PP: {}, S1: {}, R1: {}", pivots.pp, pivots.s1, pivots.r1)
    });
    let risk_assessment =
        first_section(&clean, lex.risk).unwrap_or_else(|| lex.risk_placeholder.to_string());

    NarrativeReport {
        recommendation,
        confidence,
        analysis: clean,
        trend_analysis,
        momentum_analysis,
        support_resistance,
        risk_assessment,
    }
}

fn first_section(text: &str, headings: &[&str]) -> Option<String> {
    headings.iter().find_map(|h| extract_section(text, h))
}

/// Best-effort extraction of a `**Heading**: body` section; the body
/// runs until the next bold marker
fn extract_section(text: &str, heading: &str) -> Option<String> {
    let pattern = format!(r"(?is)\*\*[^*]*{}[^*]*\*\*[:\s]*([^*]+)", regex::escape(heading));
    let re = Regex::new(&pattern).ok()?;

    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::sample_indicators;

    const TAGGED_RESPONSE: &str = "\
[RECOMMENDATION: BUY]
[CONFIDENCE: HIGH]

**Trend Analysis**: Price is trading above all major moving averages.

**Momentum Analysis**: RSI is recovering from oversold territory.

**Support and Resistance**: Support sits at 53.0, resistance at 55.67.

**Risk Assessment**: Place a stop loss below S1.
";

    #[test]
    fn test_tags_are_parsed_and_stripped() {
        let report = parse_response(
            TAGGED_RESPONSE,
            &sample_indicators(),
            ReportLanguage::English,
        );

        assert_eq!(report.recommendation, Recommendation::Buy);
        assert_eq!(report.confidence, Confidence::High);
        assert!(!report.analysis.contains("[RECOMMENDATION"));
        assert!(!report.analysis.contains("[CONFIDENCE"));
        assert!(report.analysis.starts_with("**Trend Analysis**"));
    }

    #[test]
    fn test_sections_are_extracted() {
        let report = parse_response(
            TAGGED_RESPONSE,
            &sample_indicators(),
            ReportLanguage::English,
        );

        assert_eq!(
            report.trend_analysis,
            "Price is trading above all major moving averages."
        );
        assert_eq!(
            report.momentum_analysis,
            "RSI is recovering from oversold territory."
        );
        assert_eq!(
            report.support_resistance,
            "Support sits at 53.0, resistance at 55.67."
        );
        assert_eq!(report.risk_assessment, "Place a stop loss below S1.");
    }

    #[test]
    fn test_missing_tags_default_to_hold_medium() {
        let report = parse_response(
            "Just some prose with no tags at all.",
            &sample_indicators(),
            ReportLanguage::English,
        );

        assert_eq!(report.recommendation, Recommendation::Hold);
        assert_eq!(report.confidence, Confidence::Medium);
    }

    #[test]
    fn test_unrecognized_tag_values_default() {
        let text = "[RECOMMENDATION: SHORT]\n[CONFIDENCE: EXTREME]\nBody.";
        let report = parse_response(text, &sample_indicators(), ReportLanguage::English);

        assert_eq!(report.recommendation, Recommendation::Hold);
        assert_eq!(report.confidence, Confidence::Medium);
        assert!(!report.analysis.contains("[RECOMMENDATION"));
    }

    #[test]
    fn test_lowercase_tags_are_accepted() {
        let text = "[recommendation: sell]\n[confidence: low]\nBody.";
        let report = parse_response(text, &sample_indicators(), ReportLanguage::English);

        assert_eq!(report.recommendation, Recommendation::Sell);
        assert_eq!(report.confidence, Confidence::Low);
    }

    #[test]
    fn test_missing_sections_get_placeholders() {
        let report = parse_response(
            "[RECOMMENDATION: HOLD]\n[CONFIDENCE: LOW]\nNo structure here.",
            &sample_indicators(),
            ReportLanguage::English,
        );

        assert_eq!(report.trend_analysis, "Trend analysis not available");
        assert_eq!(report.momentum_analysis, "Momentum analysis not available");
        assert_eq!(report.support_resistance, "PP: 54.33, S1: 53, R1: 55.67");
        assert_eq!(report.risk_assessment, "Manage risk and use a stop loss");
    }

    #[test]
    fn test_arabic_sections() {
        let text = "\
[RECOMMENDATION: HOLD]
[CONFIDENCE: MEDIUM]

**تحليل الاتجاه**: السهم في اتجاه عرضي.

**تحليل الزخم**: الزخم محايد.

**مستويات الدعم والمقاومة**: الدعم عند 53 والمقاومة عند 55.7.

**تقييم المخاطر**: استخدم وقف الخسارة.
";
        let report = parse_response(text, &sample_indicators(), ReportLanguage::Arabic);

        assert_eq!(report.trend_analysis, "السهم في اتجاه عرضي.");
        assert_eq!(report.momentum_analysis, "الزخم محايد.");
        assert_eq!(report.risk_assessment, "استخدم وقف الخسارة.");
    }
}
