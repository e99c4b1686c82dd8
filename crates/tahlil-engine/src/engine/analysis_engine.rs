//! Analysis engine: the public facade over the full pipeline
//!
//! One analysis is a linear asynchronous chain:
//! resolve symbol -> fetch candles -> compute indicators -> generate report.
//! The first failing stage short-circuits with a stage-tagged error; the
//! report stage never fails. The engine holds no mutable state, so
//! concurrent calls are fully independent.

use super::result::AnalysisResult;
use crate::catalog::SecurityCatalog;
use crate::config::EngineConfig;
use crate::error::{AnalysisError, AnalysisFailure, Result};
use crate::indicators;
use crate::market::{MarketDataProvider, MarketSearch};
use crate::report::ReportGenerator;
use crate::resolver::SymbolResolver;
use crate::timeframe::{Timeframe, policy_for};
use chrono::Utc;
use std::sync::Arc;
use tahlil_llm::LanguageModel;
use tokio::time::timeout;
use tracing::{info, instrument};

/// Orchestrates symbol resolution, market data, indicator calculation,
/// and report generation behind one entry point
pub struct AnalysisEngine {
    resolver: SymbolResolver,
    market: Arc<dyn MarketDataProvider>,
    reporter: ReportGenerator,
    config: Arc<EngineConfig>,
}

impl AnalysisEngine {
    /// Wire up the engine from its collaborators
    ///
    /// Passing `None` for the narrative model keeps the engine fully
    /// functional; every report then uses the deterministic fallback.
    pub fn new(
        catalog: SecurityCatalog,
        market: Arc<dyn MarketDataProvider>,
        search: Arc<dyn MarketSearch>,
        narrative: Option<Arc<dyn LanguageModel>>,
        config: EngineConfig,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            resolver: SymbolResolver::new(catalog, search, Arc::clone(&config)),
            market,
            reporter: ReportGenerator::new(narrative, Arc::clone(&config)),
            config,
        }
    }

    /// Analyze a security and produce a full recommendation report
    #[instrument(skip(self))]
    pub async fn analyze(&self, query: &str, timeframe: Timeframe) -> Result<AnalysisResult> {
        info!(query, ?timeframe, "starting analysis");

        let security = self.resolver.resolve(query).await?;
        info!(symbol = %security.symbol, "symbol resolved");

        let spec = policy_for(timeframe);
        let fetch = self.market.fetch_candles(&security.symbol, &spec);
        let candles = match timeout(self.config.request_timeout, fetch).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AnalysisError::DataFetch(format!(
                    "Timed out fetching market data for {}.",
                    security.symbol
                )));
            }
        };
        info!(candles = candles.len(), "market data fetched");

        let indicators = indicators::compute(&candles)?;
        info!("indicators computed");

        let report = self
            .reporter
            .generate(&security.symbol, &security.local_name, &indicators)
            .await;
        info!(recommendation = report.recommendation.as_str(), "report generated");

        Ok(AnalysisResult {
            symbol: security.symbol,
            name: security.name,
            local_name: security.local_name,
            timeframe,
            timestamp: Utc::now(),
            indicators,
            report,
        })
    }

    /// Non-throwing variant: classifies any pipeline error into a
    /// wire-level failure envelope
    pub async fn analyze_safe(
        &self,
        query: &str,
        timeframe: Timeframe,
    ) -> std::result::Result<AnalysisResult, AnalysisFailure> {
        self.analyze(query, timeframe).await.map_err(Into::into)
    }
}
