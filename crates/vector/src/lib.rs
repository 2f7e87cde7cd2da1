//! WanderWise Vector Store
//!
//! In-memory document store with metadata filtering and hybrid
//! (embedding + keyword) retrieval.

mod engine;
mod error;
mod filter;
mod keyword;
mod similarity;
mod store;
mod types;

pub use engine::{EmbeddingResult, StoreStats, VectorSearchEngine};
pub use error::{DimensionMismatch, EmbeddingUnavailable};
pub use filter::{
    activity_keywords, is_accessible, matches_filter, region_bucket, Region, RegionBucket,
};
pub use keyword::{keyword_score, query_terms};
pub use similarity::cosine_similarity;
pub use store::DocumentStore;
pub use types::{
    Document, DocumentMetadata, Embedding, NewDocument, RetrievalPath, ScoredDocument,
    SearchFilter,
};
