//! Configuration for the analysis engine

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Language used for the narrative report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLanguage {
    /// Arabic (default; the engine targets the Egyptian exchange)
    Arabic,
    /// English
    English,
}

impl Default for ReportLanguage {
    fn default() -> Self {
        Self::Arabic
    }
}

/// Configuration for the analysis engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exchange suffix preferred when resolving remote search hits
    pub exchange_suffix: String,

    /// When true, remote resolution fails instead of falling back to the
    /// top-ranked hit when no symbol carries the exchange suffix
    pub strict_exchange: bool,

    /// Maximum number of candidates requested from the remote search
    pub search_limit: usize,

    /// Acceptance threshold for local fuzzy matches (lower is stricter;
    /// 0 accepts only exact matches)
    pub match_threshold: f64,

    /// Timeout for the market data fetch
    pub request_timeout: Duration,

    /// Timeout for the narrative collaborator call; expiry triggers the
    /// deterministic fallback report
    pub narrative_timeout: Duration,

    /// Narrative model identifier
    pub model: String,

    /// Maximum tokens for the narrative response
    pub max_tokens: usize,

    /// Sampling temperature for the narrative response
    pub temperature: f32,

    /// Report language
    pub language: ReportLanguage,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exchange_suffix: ".CA".to_string(),
            strict_exchange: false,
            search_limit: 10,
            match_threshold: 0.25,
            request_timeout: Duration::from_secs(30),
            narrative_timeout: Duration::from_secs(60),
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 2048,
            temperature: 0.4,
            language: ReportLanguage::Arabic,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.search_limit == 0 {
            return Err(AnalysisError::Unknown(
                "search_limit must be greater than 0".to_string(),
            ));
        }

        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(AnalysisError::Unknown(
                "match_threshold must be in (0, 1]".to_string(),
            ));
        }

        if self.max_tokens == 0 {
            return Err(AnalysisError::Unknown(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    exchange_suffix: Option<String>,
    strict_exchange: Option<bool>,
    search_limit: Option<usize>,
    match_threshold: Option<f64>,
    request_timeout: Option<Duration>,
    narrative_timeout: Option<Duration>,
    model: Option<String>,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
    language: Option<ReportLanguage>,
}

impl EngineConfigBuilder {
    /// Set the preferred exchange suffix
    pub fn exchange_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exchange_suffix = Some(suffix.into());
        self
    }

    /// Require an exchange-suffix match for remote resolution
    pub fn strict_exchange(mut self, strict: bool) -> Self {
        self.strict_exchange = Some(strict);
        self
    }

    /// Set the remote search candidate limit
    pub fn search_limit(mut self, limit: usize) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Set the local fuzzy match acceptance threshold
    pub fn match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = Some(threshold);
        self
    }

    /// Set the market data fetch timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the narrative collaborator timeout
    pub fn narrative_timeout(mut self, duration: Duration) -> Self {
        self.narrative_timeout = Some(duration);
        self
    }

    /// Set the narrative model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum narrative tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the narrative sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the report language
    pub fn language(mut self, language: ReportLanguage) -> Self {
        self.language = Some(language);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            exchange_suffix: self.exchange_suffix.unwrap_or(defaults.exchange_suffix),
            strict_exchange: self.strict_exchange.unwrap_or(defaults.strict_exchange),
            search_limit: self.search_limit.unwrap_or(defaults.search_limit),
            match_threshold: self.match_threshold.unwrap_or(defaults.match_threshold),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            narrative_timeout: self.narrative_timeout.unwrap_or(defaults.narrative_timeout),
            model: self.model.unwrap_or(defaults.model),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            language: self.language.unwrap_or(defaults.language),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.exchange_suffix, ".CA");
        assert!(!config.strict_exchange);
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.language, ReportLanguage::Arabic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::builder()
            .strict_exchange(true)
            .search_limit(5)
            .request_timeout(Duration::from_secs(10))
            .language(ReportLanguage::English)
            .build()
            .expect("valid config");

        assert!(config.strict_exchange);
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.language, ReportLanguage::English);
    }

    #[test]
    fn test_validation_rejects_zero_search_limit() {
        assert!(EngineConfig::builder().search_limit(0).build().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_threshold() {
        assert!(EngineConfig::builder().match_threshold(0.0).build().is_err());
        assert!(EngineConfig::builder().match_threshold(1.5).build().is_err());
    }
}
