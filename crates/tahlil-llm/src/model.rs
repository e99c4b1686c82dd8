//! Language model trait definition

use crate::{GenerationRequest, GenerationResponse, Result};
use async_trait::async_trait;

/// Trait for language-model providers
///
/// Implementations of this trait provide access to different model
/// services (e.g., Gemini, or an OpenAI-compatible endpoint).
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate text from the model
    ///
    /// # Arguments
    ///
    /// * `request` - The generation request with prompt and parameters
    ///
    /// # Returns
    ///
    /// The generated text and token usage metadata
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;
}
