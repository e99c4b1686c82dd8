//! Concrete language-model provider implementations

mod gemini;

pub use gemini::{GeminiConfig, GeminiModel};
