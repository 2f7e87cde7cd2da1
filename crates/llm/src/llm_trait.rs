use wanderwise_common::Result;
use async_trait::async_trait;

/// Source of embedding vectors for free text
///
/// Implementations may fail per call; callers decide how to degrade.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embedding for text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Model identifier, for diagnostics
    fn model_name(&self) -> &str;
}

/// Common trait for text generation clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
