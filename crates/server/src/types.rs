use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use wanderwise_vector::{NewDocument, ScoredDocument, SearchFilter, StoreStats};

/// Itinerary request body
///
/// Only the fields used for retrieval are typed; everything else is passed
/// through to the prompt untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryPreferences {
    /// Destination area, e.g. "north" or "Grand Baie"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Requested activities; a single string is accepted as a one-item list
    #[serde(
        default,
        rename = "activityTypes",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub activity_types: Vec<String>,

    /// Accessibility required
    #[serde(default)]
    pub accessible: bool,

    /// "low", "medium" or "high"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    /// Any other preference the client sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) if s.is_empty() => Vec::new(),
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}

/// One time slot of an itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryItem {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub description: String,
    pub duration: String,
    pub accessible_features: Vec<String>,
}

/// Suggested hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelRecommendation {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_range: String,
    pub accessible_features: Vec<String>,
}

/// One-day itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub destination: String,
    pub summary: String,
    pub itinerary: Vec<ItineraryItem>,
    pub hotel_recommendation: HotelRecommendation,
    pub additional_tips: String,
}

/// Recommended attraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub best_time: String,
    pub location: String,
}

/// Recommendations response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
}

/// Store search request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    /// Search query text
    pub query: String,

    /// Top K results
    #[serde(default = "default_k")]
    pub k: usize,

    #[serde(default)]
    pub filters: Option<SearchFilter>,
}

fn default_k() -> usize {
    3
}

/// Store search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<ScoredDocument>,
}

/// Bulk insert request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddDocumentsRequest {
    pub documents: Vec<NewDocument>,
}

/// Bulk insert response
#[derive(Debug, Serialize)]
pub struct AddDocumentsResponse {
    pub added: usize,
    pub total: usize,
}

/// Store statistics response
pub type StatsResponse = StoreStats;

/// Plain message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferences_accept_list_or_string() {
        let prefs: ItineraryPreferences = serde_json::from_value(json!({
            "location": "north",
            "activityTypes": ["beach", "food"],
            "accessible": true,
            "travelers": 2
        }))
        .unwrap();
        assert_eq!(prefs.activity_types, vec!["beach", "food"]);
        assert!(prefs.accessible);
        assert_eq!(prefs.extra.get("travelers"), Some(&json!(2)));

        let prefs: ItineraryPreferences =
            serde_json::from_value(json!({"activityTypes": "hiking"})).unwrap();
        assert_eq!(prefs.activity_types, vec!["hiking"]);

        let prefs: ItineraryPreferences =
            serde_json::from_value(json!({"activityTypes": null})).unwrap();
        assert!(prefs.activity_types.is_empty());
    }

    #[test]
    fn test_preferences_round_trip_keeps_extra() {
        let prefs: ItineraryPreferences = serde_json::from_value(json!({
            "budget": "high",
            "days": 1
        }))
        .unwrap();
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["budget"], "high");
        assert_eq!(value["days"], 1);
    }

    #[test]
    fn test_search_request_defaults() {
        let req: SearchRequest = serde_json::from_value(json!({"query": "beach"})).unwrap();
        assert_eq!(req.k, 3);
        assert!(req.filters.is_none());

        let bad: Result<SearchRequest, _> =
            serde_json::from_value(json!({"query": "beach", "filters": {"regoin": "north"}}));
        assert!(bad.is_err());
    }
}
