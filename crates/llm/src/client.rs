use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use wanderwise_common::{AppConfig, Result, WanderWiseError};

use crate::llm_trait::{EmbeddingProvider, LlmClient};
use crate::types::{
    Content, EmbedContentRequest, EmbedContentResponse, GenerateContentRequest,
    GenerateContentResponse,
};

/// Generative language (Gemini) REST client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    embedding_model: String,
    llm_model: String,
    client: Client,
}

impl GeminiClient {
    /// Create new client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        embedding_model: impl Into<String>,
        llm_model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Gemini client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            embedding_model: embedding_model.into(),
            llm_model: llm_model.into(),
            client,
        })
    }

    /// Create client from application configuration
    ///
    /// Fails when no API key is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or_else(|| WanderWiseError::config("GEMINI_API_KEY is not set"))?;

        Self::new(
            &config.gemini_base_url,
            api_key,
            &config.embedding_model,
            &config.llm_model,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// REST endpoint for a model method, e.g. `embedContent`
    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/{}:{}", self.base_url, qualified_model(model), method)
    }

    /// Single embedContent call
    async fn embed_content(&self, text: &str) -> Result<Vec<f32>> {
        let url = self.endpoint(&self.embedding_model, "embedContent");
        let request = EmbedContentRequest {
            model: qualified_model(&self.embedding_model),
            content: Content::text(text),
        };

        debug!(
            "Generating embedding - Model: {}, Text length: {}",
            self.embedding_model,
            text.len()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                WanderWiseError::network(format!("Failed to send embedding request: {}", e))
            })?
            .error_for_status()
            .map_err(|e| WanderWiseError::embedding(format!("Embedding API error: {}", e)))?;

        let result: EmbedContentResponse = response
            .json()
            .await
            .map_err(|e| {
                WanderWiseError::embedding(format!("Failed to parse embedding response: {}", e))
            })?;

        if result.embedding.values.is_empty() {
            return Err(WanderWiseError::embedding("Empty embedding from API"));
        }

        debug!("Received embedding - Dimension: {}", result.embedding.values.len());
        Ok(result.embedding.values)
    }

    /// Single generateContent call
    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint(&self.llm_model, "generateContent");
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: None,
        };

        debug!(
            "Sending generate request - Model: {}, Prompt length: {}",
            self.llm_model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| WanderWiseError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| WanderWiseError::llm(format!("Generate API error: {}", e)))?;

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| WanderWiseError::llm(format!("Failed to parse response: {}", e)))?;

        let text = result
            .first_text()
            .ok_or_else(|| WanderWiseError::llm("Empty response from API"))?;

        debug!("Received response - Length: {}", text.len());
        Ok(text)
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_content(text).await
    }

    fn model_name(&self) -> &str {
        &self.embedding_model
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}

/// "embedding-001" -> "models/embedding-001"
fn qualified_model(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}
