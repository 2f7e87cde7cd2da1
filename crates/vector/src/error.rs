/// Two vectors of different dimensionality were compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("dimension mismatch: {left} vs {right}")]
pub struct DimensionMismatch {
    pub left: usize,
    pub right: usize,
}

/// Why a text could not be embedded
///
/// Never surfaced by the store or the search path; both degrade instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbeddingUnavailable {
    /// No embedding provider is configured
    #[error("no embedding provider configured")]
    NoProvider,

    /// The provider call failed
    #[error("embedding request failed: {0}")]
    Failed(String),
}
