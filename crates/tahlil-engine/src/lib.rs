//! Technical-analysis engine for Egyptian-exchange securities
//!
//! Given a free-text query and a timeframe, the engine resolves the
//! query to a canonical symbol, fetches historical OHLCV candles,
//! computes a fixed battery of technical indicators, and produces a
//! structured narrative recommendation report. It includes:
//!
//! - A static security catalog with bilingual names and search keywords
//! - Fuzzy symbol resolution with a remote market-search fallback
//! - A pure timeframe policy (intraday / short-term / daily)
//! - Momentum, trend, moving-average, and pivot-point indicators
//! - Narrative report generation with a deterministic rule-based fallback
//!
//! # Architecture
//!
//! The engine is stateless between calls and request-scoped inside one:
//! a linear chain resolve -> fetch -> compute -> report, where each
//! stage awaits the prior one and the first failure short-circuits with
//! a stage-tagged error. Market data and the narrative model sit behind
//! narrow traits and are injected, so both collaborators are swappable.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tahlil_engine::{AnalysisEngine, EngineConfig, SecurityCatalog, Timeframe, YahooMarketData};
//! use tahlil_llm::GeminiModel;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let yahoo = Arc::new(YahooMarketData::new());
//!     let narrative = GeminiModel::from_env().ok().map(|m| Arc::new(m) as _);
//!
//!     let engine = AnalysisEngine::new(
//!         SecurityCatalog::egx(),
//!         yahoo.clone(),
//!         yahoo,
//!         narrative,
//!         EngineConfig::default(),
//!     );
//!
//!     let result = engine.analyze("fawry", Timeframe::Daily).await?;
//!     println!("{}", result.summary());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod market;
pub mod report;
pub mod resolver;
pub mod timeframe;

// Re-export main types for convenience
pub use catalog::{Security, SecurityCatalog};
pub use config::{EngineConfig, ReportLanguage};
pub use engine::{AnalysisEngine, AnalysisResult};
pub use error::{AnalysisError, AnalysisFailure, ErrorCode, Result};
pub use indicators::{IndicatorSet, Macd, MovingAverages, PivotPoints, Stochastic};
pub use market::{Candle, MarketDataProvider, MarketSearch, SearchHit, YahooMarketData};
pub use report::{Confidence, NarrativeReport, Recommendation, ReportGenerator};
pub use resolver::SymbolResolver;
pub use timeframe::{Interval, Timeframe, TimeframeSpec, policy_for};
