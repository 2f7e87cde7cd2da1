use std::sync::Arc;
use wanderwise_common::{AppConfig, Result};
use wanderwise_llm::{EmbeddingProvider, GeminiClient, LlmClient};
use wanderwise_vector::{DocumentStore, VectorSearchEngine};

use crate::rag::RagService;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Retrieval over the shared document store
    pub vector_search: VectorSearchEngine,

    /// Itinerary and recommendation generator
    pub rag: RagService,
}

impl AppState {
    /// Create new application state with an empty store
    ///
    /// Embeddings and generation are enabled only when an API key is
    /// configured.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (embedder, llm): (Option<Arc<dyn EmbeddingProvider>>, Option<Arc<dyn LlmClient>>) =
            if config.has_api_key() {
                let client = Arc::new(GeminiClient::from_config(&config)?);
                let embedder: Arc<dyn EmbeddingProvider> = client.clone();
                let llm: Arc<dyn LlmClient> = client;
                (Some(embedder), Some(llm))
            } else {
                tracing::warn!("GEMINI_API_KEY not set - keyword search and fallback responses only");
                (None, None)
            };

        Ok(Self::with_providers(config, embedder, llm))
    }

    /// Create state around explicit providers
    pub fn with_providers(
        config: AppConfig,
        embedder: Option<Arc<dyn EmbeddingProvider>>,
        llm: Option<Arc<dyn LlmClient>>,
    ) -> Self {
        let vector_search = VectorSearchEngine::new(Arc::new(DocumentStore::new()), embedder);
        let rag = RagService::new(vector_search.clone(), llm);

        Self {
            config,
            vector_search,
            rag,
        }
    }
}
