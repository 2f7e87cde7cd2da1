use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::{Document, Embedding, NewDocument};

/// Append-only in-memory document collection
///
/// Documents keep their insertion order and are never updated or removed.
/// Readers get a snapshot, so a search running alongside a bulk insert sees
/// the documents appended so far.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<Vec<Arc<Document>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document, assigning the next sequence number
    pub async fn append(&self, document: NewDocument, embedding: Embedding) -> Arc<Document> {
        let mut documents = self.documents.write().await;
        let stored = Arc::new(Document {
            id: documents.len() as u64,
            content: document.content,
            embedding,
            metadata: document.metadata,
            indexed_at: Utc::now(),
        });
        documents.push(Arc::clone(&stored));
        stored
    }

    /// All documents, oldest first
    pub async fn all(&self) -> Vec<Arc<Document>> {
        self.documents.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Number of documents carrying an embedding
    pub async fn embedded_count(&self) -> usize {
        self.documents
            .read()
            .await
            .iter()
            .filter(|doc| doc.embedding.is_embedded())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentMetadata;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = DocumentStore::new();
        assert!(store.is_empty().await);

        for content in ["first", "second", "third"] {
            store
                .append(
                    NewDocument::new(content, DocumentMetadata::default()),
                    Embedding::Unembedded,
                )
                .await;
        }

        let all = store.all().await;
        let contents: Vec<&str> = all.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        let ids: Vec<u64> = all.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_embedded_count() {
        let store = DocumentStore::new();
        store
            .append(NewDocument::default(), Embedding::Embedded(vec![1.0, 0.0]))
            .await;
        store.append(NewDocument::default(), Embedding::Unembedded).await;
        assert_eq!(store.embedded_count().await, 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_stable() {
        let store = DocumentStore::new();
        store.append(NewDocument::default(), Embedding::Unembedded).await;
        let snapshot = store.all().await;
        store.append(NewDocument::default(), Embedding::Unembedded).await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }
}
