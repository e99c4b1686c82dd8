//! Language-model abstraction for the tahlil analysis engine
//!
//! This crate provides a narrow, provider-agnostic contract for the
//! narrative collaborator: a prompt string goes in, free text comes out.
//! It includes:
//!
//! - Generation request/response types
//! - The `LanguageModel` trait implemented by concrete providers
//! - A Google Gemini provider built on `reqwest`
//!
//! Providers are swappable behind the trait; the engine never depends on
//! a concrete service.

pub mod error;
pub mod generation;
pub mod model;
pub mod providers;

// Re-export main types
pub use error::{LlmError, Result};
pub use generation::{GenerationRequest, GenerationResponse, TokenUsage};
pub use model::LanguageModel;
pub use providers::{GeminiConfig, GeminiModel};
