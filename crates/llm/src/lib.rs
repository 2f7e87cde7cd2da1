//! WanderWise LLM Integration
//!
//! Generative language API client, embedding provider seam and prompt templates

mod client;
mod json;
mod llm_trait;
mod prompts;
mod types;

pub use client::GeminiClient;
pub use json::extract_json;
pub use llm_trait::{EmbeddingProvider, LlmClient};
pub use prompts::{itinerary_prompt, recommendations_prompt, PromptContext, PERSONA};
pub use types::{
    Candidate, Content, ContentEmbedding, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
