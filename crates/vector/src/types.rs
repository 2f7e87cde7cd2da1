use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Embedding state of a stored document
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Embedding {
    /// Vector obtained from the embedding provider
    Embedded(Vec<f32>),

    /// Provider absent or failed at insertion time
    #[default]
    Unembedded,
}

impl Embedding {
    /// Vector, if embedded
    pub fn vector(&self) -> Option<&[f32]> {
        match self {
            Self::Embedded(values) => Some(values),
            Self::Unembedded => None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(_))
    }
}

/// Structured document metadata
///
/// Unknown keys are rejected on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentMetadata {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// "attraction" or "hotel"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-form type, e.g. "Beach", "Hotel", "hiking"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Place name or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Main activity, e.g. "beach", "walking"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Explicit accessibility flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,

    /// Accessibility and amenity features
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,

    /// Guide text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide: Option<String>,

    /// "$", "$$" or "$$$"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
}

/// Input to a bulk insert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDocument {
    pub content: String,

    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl NewDocument {
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// Stored document, immutable once inserted
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Insertion sequence number, starting at 0
    pub id: u64,

    pub content: String,

    #[serde(skip)]
    pub embedding: Embedding,

    pub metadata: DocumentMetadata,

    /// Timestamp when stored
    pub indexed_at: DateTime<Utc>,
}

/// Metadata filter for a search
///
/// Every populated clause must pass. Unknown keys are rejected on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchFilter {
    /// Place name or region, matched by region bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Requested activity keys; any one matching is enough
    #[serde(
        default,
        rename = "activityTypes",
        alias = "activity_types",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub activity_types: Vec<String>,

    /// Matches metadata `category` or `type`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Matches metadata `type` only
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Require accessibility when true
    #[serde(default)]
    pub accessible: bool,
}

impl SearchFilter {
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_activity_types<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activity_types = activities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn accessible_only(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }
}

/// Ranking path that produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalPath {
    /// Cosine similarity in [-1, 1]
    Embedding,

    /// Count of query terms found in the content
    Keyword,
}

/// Search result
///
/// Scores are only comparable within one result list.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Arc<Document>,

    pub similarity: f32,

    pub path: RetrievalPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_wire_names() {
        let metadata: DocumentMetadata = serde_json::from_value(json!({
            "name": "La Pirogue",
            "category": "hotel",
            "type": "Hotel",
            "price_range": "$$",
            "features": ["ground-floor rooms available"]
        }))
        .unwrap();
        assert_eq!(metadata.kind.as_deref(), Some("Hotel"));
        assert_eq!(metadata.price_range.as_deref(), Some("$$"));
        assert_eq!(metadata.features.len(), 1);
        assert!(metadata.tips.is_empty());
    }

    #[test]
    fn test_metadata_rejects_unknown_keys() {
        let result: Result<DocumentMetadata, _> =
            serde_json::from_value(json!({"locaton": "North"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_wire_names() {
        let filter: SearchFilter = serde_json::from_value(json!({
            "location": "south",
            "activityTypes": ["beach", "food"],
            "accessible": true
        }))
        .unwrap();
        assert_eq!(
            filter,
            SearchFilter::default()
                .with_location("south")
                .with_activity_types(["beach", "food"])
                .accessible_only(true)
        );

        let filter: SearchFilter =
            serde_json::from_value(json!({"activity_types": ["hiking"]})).unwrap();
        assert_eq!(filter.activity_types, vec!["hiking".to_string()]);
    }

    #[test]
    fn test_filter_rejects_unknown_keys() {
        let result: Result<SearchFilter, _> = serde_json::from_value(json!({"catgory": "hotel"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_scored_document_serialization() {
        let doc = Document {
            id: 3,
            content: "Beach resort".to_string(),
            embedding: Embedding::Embedded(vec![0.1, 0.2]),
            metadata: DocumentMetadata {
                category: Some("hotel".to_string()),
                ..Default::default()
            },
            indexed_at: Utc::now(),
        };
        let scored = ScoredDocument {
            document: Arc::new(doc),
            similarity: 2.0,
            path: RetrievalPath::Keyword,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["content"], "Beach resort");
        assert_eq!(value["metadata"]["category"], "hotel");
        assert_eq!(value["similarity"], 2.0);
        assert_eq!(value["path"], "keyword");
        assert!(value.get("embedding").is_none());
    }
}
