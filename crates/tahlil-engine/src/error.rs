//! Error types for analysis operations
//!
//! Every variant is tagged with its stage of origin, so classification
//! into the wire-level error code is structural rather than based on
//! message contents. Messages are written for end-user display and never
//! carry raw collaborator errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analysis pipeline errors
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The query resolved to nothing, locally or remotely
    #[error("No security matches \"{0}\". Check the stock name or use the exchange symbol directly (e.g. \"FWRY.CA\").")]
    SymbolNotFound(String),

    /// The market data collaborator was unreachable, empty, or invalid
    #[error("{0}")]
    DataFetch(String),

    /// Fewer than the minimum number of valid candles survived filtering
    #[error("Not enough market data: got {got} candles, need at least {need}")]
    InsufficientData { got: usize, need: usize },

    /// Indicator math failure (reserved; calculation resolves missing
    /// values to "unavailable" instead of failing)
    #[error("Indicator calculation failed: {0}")]
    Calculation(String),

    /// Narrative generation failure (reserved; generation self-heals via
    /// the deterministic fallback and should never surface this)
    #[error("Analysis report could not be generated: {0}")]
    Narrative(String),

    /// Catch-all
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Wire-level error code, one per error stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    SymbolNotFound,
    DataFetchError,
    InsufficientData,
    CalculationError,
    NarrativeError,
    UnknownError,
}

impl ErrorCode {
    /// HTTP status the consuming endpoint should use for this code
    ///
    /// Not-found is user-correctable; data-fetch (and its
    /// insufficient-data variant) is an upstream problem; everything else
    /// is an internal error.
    pub fn http_status(self) -> u16 {
        match self {
            Self::SymbolNotFound => 404,
            Self::DataFetchError | Self::InsufficientData => 502,
            Self::CalculationError | Self::NarrativeError | Self::UnknownError => 500,
        }
    }
}

impl AnalysisError {
    /// The wire-level code for this error, derived from the variant
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SymbolNotFound(_) => ErrorCode::SymbolNotFound,
            Self::DataFetch(_) => ErrorCode::DataFetchError,
            Self::InsufficientData { .. } => ErrorCode::InsufficientData,
            Self::Calculation(_) => ErrorCode::CalculationError,
            Self::Narrative(_) => ErrorCode::NarrativeError,
            Self::Unknown(_) => ErrorCode::UnknownError,
        }
    }
}

/// Failure envelope returned by the non-throwing analysis entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFailure {
    /// Stage-derived error code
    pub code: ErrorCode,
    /// User-displayable message
    pub message: String,
}

impl From<AnalysisError> for AnalysisFailure {
    fn from(err: AnalysisError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
