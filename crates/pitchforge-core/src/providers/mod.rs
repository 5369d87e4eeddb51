//! Text generation providers.
//!
//! The orchestrator talks to a [`TextGenerator`]; the production
//! implementation is the Gemini client, and tests substitute deterministic
//! stubs behind the same trait.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::error::Result;

/// A remote (or stubbed) text generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    /// Produce completion text for one prompt.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
