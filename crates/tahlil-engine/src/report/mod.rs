//! Narrative report generation
//!
//! Builds a structured prompt from the indicator set, asks the narrative
//! collaborator for an analysis, and parses the response into a typed
//! report. Generation never fails outward: a missing credential, a
//! transport error, a timeout, or a malformed response all degrade to a
//! deterministic rule-based report.

pub mod fallback;
mod parse;
mod prompt;

use crate::config::EngineConfig;
use crate::indicators::IndicatorSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tahlil_llm::{GenerationRequest, LanguageModel};
use tokio::time::timeout;
use tracing::{debug, warn};

/// Trading recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl Recommendation {
    /// Wire form of the recommendation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        }
    }
}

/// Confidence level attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Wire form of the confidence level
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// Structured narrative analysis report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeReport {
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    /// Full analysis text with machine tags stripped
    pub analysis: String,
    pub trend_analysis: String,
    pub momentum_analysis: String,
    pub support_resistance: String,
    pub risk_assessment: String,
}

/// Generates narrative reports, degrading to the deterministic fallback
/// whenever the collaborator cannot deliver
pub struct ReportGenerator {
    model: Option<Arc<dyn LanguageModel>>,
    config: Arc<EngineConfig>,
}

impl ReportGenerator {
    /// Create a generator; passing `None` for the model means every
    /// report uses the deterministic fallback
    pub fn new(model: Option<Arc<dyn LanguageModel>>, config: Arc<EngineConfig>) -> Self {
        Self { model, config }
    }

    /// Generate a report for the given security and indicator set
    ///
    /// Always returns a well-formed report; collaborator failures are
    /// logged and substituted, never propagated.
    pub async fn generate(
        &self,
        symbol: &str,
        local_name: &str,
        indicators: &IndicatorSet,
    ) -> NarrativeReport {
        let Some(model) = &self.model else {
            warn!("narrative model not configured, using deterministic report");
            return fallback::deterministic_report(indicators, self.config.language);
        };

        let prompt = prompt::build_prompt(symbol, local_name, indicators, self.config.language);
        let request = GenerationRequest::builder(self.config.model.clone())
            .prompt(prompt)
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build();

        debug!(symbol, model = %self.config.model, "requesting narrative analysis");

        match timeout(self.config.narrative_timeout, model.generate(request)).await {
            Ok(Ok(response)) => {
                debug!(symbol, chars = response.text.len(), "narrative received");
                parse::parse_response(&response.text, indicators, self.config.language)
            }
            Ok(Err(e)) => {
                warn!(symbol, error = %e, "narrative generation failed, using deterministic report");
                fallback::deterministic_report(indicators, self.config.language)
            }
            Err(_) => {
                warn!(symbol, "narrative generation timed out, using deterministic report");
                fallback::deterministic_report(indicators, self.config.language)
            }
        }
    }
}
