//! Analysis result type

use crate::indicators::IndicatorSet;
use crate::report::NarrativeReport;
use crate::timeframe::Timeframe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete outcome of one successful analysis call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Resolved exchange ticker
    pub symbol: String,
    /// English name of the security
    pub name: String,
    /// Arabic name of the security
    pub local_name: String,
    /// Timeframe the analysis was computed over
    pub timeframe: Timeframe,
    /// When the analysis completed
    pub timestamp: DateTime<Utc>,
    /// Computed indicator battery
    pub indicators: IndicatorSet,
    /// Narrative recommendation report
    pub report: NarrativeReport,
}

impl AnalysisResult {
    /// One-line human summary of the outcome
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) {:?}: {} / {}",
            self.symbol,
            self.local_name,
            self.timeframe,
            self.report.recommendation.as_str(),
            self.report.confidence.as_str(),
        )
    }
}
