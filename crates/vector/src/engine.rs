use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wanderwise_llm::EmbeddingProvider;

use crate::error::EmbeddingUnavailable;
use crate::filter::matches_filter;
use crate::keyword::{keyword_score, query_terms};
use crate::similarity::cosine_similarity;
use crate::store::DocumentStore;
use crate::types::{Document, Embedding, NewDocument, RetrievalPath, ScoredDocument, SearchFilter};

/// Outcome of embedding a single text
pub type EmbeddingResult = std::result::Result<Vec<f32>, EmbeddingUnavailable>;

/// Store statistics
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoreStats {
    pub total_documents: usize,
    pub embedded_documents: usize,
    pub embedding_model: Option<String>,
}

/// Retrieval over a shared [`DocumentStore`]
///
/// Ranks by cosine similarity when an embedding provider is available and
/// falls back to keyword overlap otherwise. Provider failures never reach
/// the caller.
#[derive(Clone)]
pub struct VectorSearchEngine {
    store: Arc<DocumentStore>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
}

impl VectorSearchEngine {
    /// Create new vector search engine
    pub fn new(store: Arc<DocumentStore>, embedder: Option<Arc<dyn EmbeddingProvider>>) -> Self {
        match &embedder {
            Some(provider) => info!(
                "Vector search engine initialized - embedding model: {}",
                provider.model_name()
            ),
            None => {
                info!("Vector search engine initialized without embeddings - keyword search only")
            }
        }

        Self { store, embedder }
    }

    /// Shared store handle
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Embed a text with the configured provider
    pub async fn embed_text(&self, text: &str) -> EmbeddingResult {
        let provider = self.embedder.as_ref().ok_or(EmbeddingUnavailable::NoProvider)?;
        provider
            .embed(text)
            .await
            .map_err(|e| EmbeddingUnavailable::Failed(e.to_string()))
    }

    /// Embed and append documents in input order
    ///
    /// Embedding requests are issued one at a time. A document whose
    /// embedding fails is stored unembedded. Returns the number of documents
    /// added.
    pub async fn add_documents(&self, documents: Vec<NewDocument>) -> usize {
        let count = documents.len();

        for document in documents {
            let embedding = match self.embed_text(&document.content).await {
                Ok(values) => Embedding::Embedded(values),
                Err(EmbeddingUnavailable::NoProvider) => Embedding::Unembedded,
                Err(e) => {
                    warn!("Storing document without embedding: {}", e);
                    Embedding::Unembedded
                }
            };
            self.store.append(document, embedding).await;
        }

        info!("Added {} documents to vector store", count);
        count
    }

    /// All stored documents, oldest first
    pub async fn all(&self) -> Vec<Arc<Document>> {
        self.store.all().await
    }

    /// Top-`k` documents for `query` among those passing `filter`
    ///
    /// Never fails: an empty store, an empty candidate set or a blank query
    /// yield an empty list.
    pub async fn search(
        &self,
        query: &str,
        k: usize,
        filter: Option<&SearchFilter>,
    ) -> Vec<ScoredDocument> {
        debug!("Searching for: {} (k={}, filter={:?})", query, k, filter);

        if k == 0 || query.trim().is_empty() {
            return Vec::new();
        }

        let documents = self.store.all().await;
        if documents.is_empty() {
            return Vec::new();
        }

        let total_candidates = documents.len();
        let candidates: Vec<Arc<Document>> = documents
            .into_iter()
            .filter(|doc| matches_filter(&doc.metadata, filter))
            .collect();
        if candidates.is_empty() {
            debug!("No documents pass the filter ({} stored)", total_candidates);
            return Vec::new();
        }

        match self.embed_text(query).await {
            Ok(query_vector) => {
                let results = rank_by_embedding(&query_vector, &candidates, k);
                if !results.is_empty() {
                    info!(
                        "Search completed - {} results by embedding (filtered {} of {})",
                        results.len(),
                        candidates.len(),
                        total_candidates
                    );
                    return results;
                }
                debug!("No embedded candidates, falling back to keyword scoring");
            }
            Err(EmbeddingUnavailable::NoProvider) => {}
            Err(e) => warn!("Query embedding unavailable, falling back to keyword scoring: {}", e),
        }

        let results = rank_by_keywords(query, &candidates, k);
        info!(
            "Search completed - {} results by keyword (filtered {} of {})",
            results.len(),
            candidates.len(),
            total_candidates
        );
        results
    }

    /// Get store statistics
    pub async fn stats(&self) -> StoreStats {
        StoreStats {
            total_documents: self.store.len().await,
            embedded_documents: self.store.embedded_count().await,
            embedding_model: self.embedder.as_ref().map(|p| p.model_name().to_string()),
        }
    }
}

/// Stable descending sort, then truncate
///
/// Scores must be finite; `total_cmp` keeps the order total regardless.
fn top_k(mut results: Vec<ScoredDocument>, k: usize) -> Vec<ScoredDocument> {
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    results.truncate(k);
    results
}

fn rank_by_embedding(query: &[f32], candidates: &[Arc<Document>], k: usize) -> Vec<ScoredDocument> {
    let scored = candidates
        .iter()
        .filter_map(|doc| {
            let vector = doc.embedding.vector()?;
            match cosine_similarity(query, vector) {
                Ok(similarity) if !similarity.is_finite() => {
                    warn!("Skipping document {}: non-finite similarity", doc.id);
                    None
                }
                Ok(similarity) => Some(ScoredDocument {
                    document: Arc::clone(doc),
                    similarity,
                    path: RetrievalPath::Embedding,
                }),
                Err(e) => {
                    warn!("Skipping document {}: {}", doc.id, e);
                    None
                }
            }
        })
        .collect();

    top_k(scored, k)
}

fn rank_by_keywords(query: &str, candidates: &[Arc<Document>], k: usize) -> Vec<ScoredDocument> {
    let terms = query_terms(query);
    let scored = candidates
        .iter()
        .map(|doc| ScoredDocument {
            document: Arc::clone(doc),
            similarity: keyword_score(&terms, &doc.content) as f32,
            path: RetrievalPath::Keyword,
        })
        .collect();

    top_k(scored, k)
}
