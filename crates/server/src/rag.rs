//! Retrieval-augmented itinerary and recommendation generation.

use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use wanderwise_common::{Result, WanderWiseError};
use wanderwise_llm::{
    extract_json, itinerary_prompt, recommendations_prompt, LlmClient, PromptContext,
};
use wanderwise_vector::{ScoredDocument, SearchFilter, VectorSearchEngine};

use crate::types::{
    HotelRecommendation, Itinerary, ItineraryItem, ItineraryPreferences, Recommendation,
    Recommendations,
};

const DEFAULT_DESTINATION: &str = "Mauritius";
const ATTRACTION_RESULTS: usize = 10;
const HOTEL_RESULTS: usize = 5;
const FALLBACK_ITEMS: usize = 3;

const TIME_SLOTS: [(&str, &str); FALLBACK_ITEMS] = [
    ("Morning (8:00 AM - 12:00 PM)", "3-4 hours"),
    ("Afternoon (1:00 PM - 5:00 PM)", "3-4 hours"),
    ("Evening (6:00 PM onwards)", "2-3 hours"),
];

/// Itinerary and recommendation generator
///
/// Works without a language model: retrieved context is then assembled
/// into a simple plan directly.
#[derive(Clone)]
pub struct RagService {
    engine: VectorSearchEngine,
    llm: Option<Arc<dyn LlmClient>>,
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn prompt_context(documents: &[ScoredDocument]) -> Vec<PromptContext<'_>> {
    documents
        .iter()
        .map(|doc| PromptContext {
            content: &doc.document.content,
            features: &doc.document.metadata.features,
        })
        .collect()
}

impl RagService {
    pub fn new(engine: VectorSearchEngine, llm: Option<Arc<dyn LlmClient>>) -> Self {
        Self { engine, llm }
    }

    /// Run the prompt through the model, if there is one
    async fn complete(&self, prompt: &str) -> Result<String> {
        let llm = self
            .llm
            .as_ref()
            .ok_or_else(|| WanderWiseError::config("GEMINI_API_KEY is not set"))?;
        llm.generate(prompt).await
    }

    /// Personalized one-day itinerary
    pub async fn generate_itinerary(&self, preferences: &ItineraryPreferences) -> Result<Value> {
        let activities = if preferences.activity_types.is_empty() {
            "tourists".to_string()
        } else {
            preferences.activity_types.join(", ")
        };
        let location = preferences
            .location
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_DESTINATION);
        let query = format!("Activities for {} in {}", activities, location);

        let mut attraction_filter = SearchFilter::default()
            .with_activity_types(preferences.activity_types.clone())
            .accessible_only(preferences.accessible);
        attraction_filter.location = preferences.location.clone();
        let attractions = self
            .engine
            .search(&query, ATTRACTION_RESULTS, Some(&attraction_filter))
            .await;

        let mut hotel_filter = SearchFilter::default()
            .with_category("hotel")
            .accessible_only(preferences.accessible);
        hotel_filter.location = preferences.location.clone();
        let hotels = self
            .engine
            .search("Recommended hotels", HOTEL_RESULTS, Some(&hotel_filter))
            .await;

        info!(
            "Itinerary context: {} attractions, {} hotels",
            attractions.len(),
            hotels.len()
        );

        let combined: Vec<ScoredDocument> = attractions.iter().chain(&hotels).cloned().collect();
        let preferences_json = serde_json::to_value(preferences)?;
        let prompt = itinerary_prompt(&preferences_json, &prompt_context(&combined));

        let text = match self.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Falling back to simple itinerary: {}", e);
                let itinerary = fallback_itinerary(preferences, &attractions, &hotels);
                return Ok(serde_json::to_value(itinerary)?);
            }
        };

        extract_json(&text).map_err(|e| {
            error!("Error parsing JSON from itinerary response: {}", e);
            WanderWiseError::llm("Failed to generate itinerary")
        })
    }

    /// Top three attractions
    pub async fn top_recommendations(&self) -> Result<Value> {
        let context = self
            .engine
            .search("Top attractions in Mauritius", ATTRACTION_RESULTS, None)
            .await;
        let prompt = recommendations_prompt(&prompt_context(&context));

        let text = match self.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Falling back to simple recommendations: {}", e);
                return Ok(serde_json::to_value(fallback_recommendations(&context))?);
            }
        };

        extract_json(&text).map_err(|e| {
            error!("Error parsing JSON from recommendations response: {}", e);
            WanderWiseError::llm("Failed to get recommendations")
        })
    }
}

fn budget_price_range(budget: Option<&str>) -> &'static str {
    match budget {
        Some("high") => "$$$",
        Some("medium") => "$$",
        _ => "$",
    }
}

/// Plan assembled straight from retrieved context
pub fn fallback_itinerary(
    preferences: &ItineraryPreferences,
    attractions: &[ScoredDocument],
    hotels: &[ScoredDocument],
) -> Itinerary {
    let destination = preferences
        .location
        .clone()
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

    let itinerary = attractions
        .iter()
        .zip(TIME_SLOTS)
        .map(|(item, (time, duration))| {
            let metadata = &item.document.metadata;
            ItineraryItem {
                time: time.to_string(),
                activity: metadata
                    .activity
                    .clone()
                    .unwrap_or_else(|| "Explore local attraction".to_string()),
                location: metadata.location.clone().unwrap_or_else(|| destination.clone()),
                description: truncate_chars(&item.document.content, 200),
                duration: duration.to_string(),
                accessible_features: metadata.features.clone(),
            }
        })
        .collect();

    let hotel = hotels.first().map(|h| &h.document);
    let hotel_recommendation = HotelRecommendation {
        name: hotel
            .and_then(|h| h.metadata.name.clone())
            .unwrap_or_else(|| "Local Hotel".to_string()),
        location: hotel
            .and_then(|h| h.metadata.location.clone())
            .unwrap_or_else(|| destination.clone()),
        description: hotel
            .map(|h| truncate_chars(&h.content, 160))
            .unwrap_or_else(|| "A comfortable stay close to your activities.".to_string()),
        price_range: hotel
            .and_then(|h| h.metadata.price_range.clone())
            .unwrap_or_else(|| budget_price_range(preferences.budget.as_deref()).to_string()),
        accessible_features: hotel.map(|h| h.metadata.features.clone()).unwrap_or_default(),
    };

    Itinerary {
        destination,
        summary: "Personalized one-day plan based on available context.".to_string(),
        itinerary,
        hotel_recommendation,
        additional_tips: "Consider travel time between activities and stay hydrated.".to_string(),
    }
}

/// Top three retrieved documents as recommendations
pub fn fallback_recommendations(context: &[ScoredDocument]) -> Recommendations {
    let recommendations = context
        .iter()
        .take(FALLBACK_ITEMS)
        .map(|item| {
            let metadata = &item.document.metadata;
            Recommendation {
                name: metadata.name.clone().unwrap_or_else(|| "Attraction".to_string()),
                kind: metadata.kind.clone().unwrap_or_else(|| "Attraction".to_string()),
                description: truncate_chars(&item.document.content, 160),
                best_time: metadata.best_time.clone().unwrap_or_else(|| "Morning".to_string()),
                location: metadata
                    .location
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
            }
        })
        .collect();

    Recommendations { recommendations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_documents;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use wanderwise_vector::DocumentStore;

    /// Returns a canned reply and records the prompt it was given
    struct CannedLlm {
        reply: Result<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedLlm {
        fn replying(reply: Result<String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmClient for CannedLlm {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(WanderWiseError::llm(e.to_string())),
            }
        }
    }

    async fn seeded_engine() -> VectorSearchEngine {
        let engine = VectorSearchEngine::new(Arc::new(DocumentStore::new()), None);
        engine.add_documents(demo_documents()).await;
        engine
    }

    fn preferences(value: Value) -> ItineraryPreferences {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_fallback_itinerary_without_llm() {
        let rag = RagService::new(seeded_engine().await, None);
        let prefs = preferences(json!({
            "location": "north",
            "activityTypes": ["beach"],
            "budget": "medium"
        }));

        let value = rag.generate_itinerary(&prefs).await.unwrap();
        let itinerary: Itinerary = serde_json::from_value(value).unwrap();

        assert_eq!(itinerary.destination, "north");
        // Grand Baie by activity, LUX Grand Gaube by its "beachfront" description
        assert_eq!(itinerary.itinerary.len(), 2);
        assert_eq!(itinerary.itinerary[0].location, "North");
        assert_eq!(itinerary.itinerary[1].time, "Afternoon (1:00 PM - 5:00 PM)");
        assert_eq!(itinerary.itinerary[0].time, "Morning (8:00 AM - 12:00 PM)");
        assert!(itinerary.itinerary[0].description.starts_with("Grand Baie"));
        assert_eq!(itinerary.hotel_recommendation.name, "LUX Grand Gaube");
        assert_eq!(itinerary.hotel_recommendation.price_range, "$$$");
    }

    #[tokio::test]
    async fn test_fallback_itinerary_without_hotels_uses_budget() {
        let rag = RagService::new(seeded_engine().await, None);
        let prefs = preferences(json!({"location": "Port Louis", "budget": "high"}));

        let itinerary: Itinerary =
            serde_json::from_value(rag.generate_itinerary(&prefs).await.unwrap()).unwrap();
        assert!(itinerary.itinerary.is_empty());
        assert_eq!(itinerary.hotel_recommendation.name, "Local Hotel");
        assert_eq!(itinerary.hotel_recommendation.location, "Port Louis");
        assert_eq!(itinerary.hotel_recommendation.price_range, "$$$");
    }

    #[tokio::test]
    async fn test_accessible_itinerary_context() {
        let llm = CannedLlm::replying(Ok("```json\n{\"destination\": \"Mauritius\"}\n```".to_string()));
        let rag = RagService::new(seeded_engine().await, Some(llm.clone()));
        let prefs = preferences(json!({"location": "south", "accessible": true}));

        let value = rag.generate_itinerary(&prefs).await.unwrap();
        assert_eq!(value, json!({"destination": "Mauritius"}));

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Chamarel Seven Colored Earth"));
        assert!(prompts[0].contains("(Accessibility: ramp, elevator, accessible bathrooms)"));
        assert!(!prompts[0].contains("LUX Grand Gaube"));
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back() {
        let llm = CannedLlm::replying(Err(WanderWiseError::network("timeout")));
        let rag = RagService::new(seeded_engine().await, Some(llm));

        let value = rag.top_recommendations().await.unwrap();
        let recs: Recommendations = serde_json::from_value(value).unwrap();
        assert_eq!(recs.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn test_unparseable_llm_output_is_an_error() {
        let llm = CannedLlm::replying(Ok("Sorry, I cannot help with that.".to_string()));
        let rag = RagService::new(seeded_engine().await, Some(llm));

        let err = rag.top_recommendations().await.unwrap_err();
        assert_eq!(err.to_string(), "LLM error: Failed to get recommendations");

        let err = rag
            .generate_itinerary(&ItineraryPreferences::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "LLM error: Failed to generate itinerary");
    }

    #[tokio::test]
    async fn test_fallback_recommendations_fields() {
        let rag = RagService::new(seeded_engine().await, None);
        let value = rag.top_recommendations().await.unwrap();
        let recs: Recommendations = serde_json::from_value(value).unwrap();

        // Keyword fallback; Chamarel is the first document matching "in" and "mauritius".
        let first = &recs.recommendations[0];
        assert_eq!(first.name, "Chamarel Seven Colored Earth");
        assert_eq!(first.kind, "Geological Formation");
        assert_eq!(first.location, "South");
        assert!(first.description.chars().count() <= 160);
    }

    #[test]
    fn test_budget_price_range() {
        assert_eq!(budget_price_range(Some("high")), "$$$");
        assert_eq!(budget_price_range(Some("medium")), "$$");
        assert_eq!(budget_price_range(None), "$");
    }
}
