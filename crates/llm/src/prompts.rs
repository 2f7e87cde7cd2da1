//! Prompt templates for itinerary and recommendation generation

use serde_json::Value;

/// Assistant persona shared by all prompts
pub const PERSONA: &str = "You are WanderWise, an AI travel assistant for Mauritius.";

/// One retrieved document as seen by a prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub content: &'a str,
    pub features: &'a [String],
}

const ITINERARY_SCHEMA: &str = r#"{
  "destination": "Mauritius",
  "summary": "Brief overview of the day",
  "itinerary": [
    {
      "time": "Morning (8:00 AM - 12:00 PM)",
      "activity": "Activity name",
      "location": "Location name",
      "description": "Detailed description",
      "duration": "2-3 hours",
      "accessible_features": ["ramp", "elevator"]
    },
    {
      "time": "Afternoon (1:00 PM - 5:00 PM)",
      "activity": "Activity name",
      "location": "Location name",
      "description": "Detailed description",
      "duration": "3-4 hours",
      "accessible_features": ["ramp", "elevator"]
    },
    {
      "time": "Evening (6:00 PM onwards)",
      "activity": "Activity name",
      "location": "Location name",
      "description": "Detailed description",
      "duration": "2-3 hours",
      "accessible_features": ["ramp", "elevator"]
    }
  ],
  "hotel_recommendation": {
    "name": "Hotel name",
    "location": "Hotel location",
    "description": "Why it matches preferences",
    "price_range": "$$",
    "accessible_features": ["elevator", "step-free access", "accessible rooms"]
  },
  "additional_tips": "Practical advice for the day"
}"#;

const RECOMMENDATIONS_SCHEMA: &str = r#"{
  "recommendations": [
    {
      "name": "Attraction name",
      "type": "Attraction type",
      "description": "Why it's recommended",
      "best_time": "Best time to visit",
      "location": "Location",
      "accessible_features": ["ramp", "elevator"]
    },
    ... (2 more)
  ]
}"#;

/// Bullet list of context documents, with accessibility features appended
fn context_lines(context: &[PromptContext<'_>]) -> String {
    context
        .iter()
        .map(|item| {
            if item.features.is_empty() {
                format!("- {}", item.content)
            } else {
                format!("- {} (Accessibility: {})", item.content, item.features.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for a one-day itinerary
pub fn itinerary_prompt(preferences: &Value, context: &[PromptContext<'_>]) -> String {
    format!(
        "{persona} Create a personalized one-day itinerary based on:\n\
         User Preferences: {preferences}\n\n\
         Use ONLY the following context about Mauritius:\n\
         {context}\n\n\
         IMPORTANT:\n\
         - Return ONLY valid JSON with no additional text\n\
         - Wrap the JSON in ```json code blocks\n\
         - Follow this schema exactly:\n\
         {schema}\n",
        persona = PERSONA,
        preferences = preferences,
        context = context_lines(context),
        schema = ITINERARY_SCHEMA,
    )
}

/// Prompt for the top three attractions
pub fn recommendations_prompt(context: &[PromptContext<'_>]) -> String {
    format!(
        "As WanderWise, recommend the top 3 attractions in Mauritius. Use ONLY this context:\n\
         {context}\n\n\
         Return JSON format:\n\
         {schema}\n",
        context = context_lines(context),
        schema = RECOMMENDATIONS_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_lines_with_features() {
        let features = vec!["ramp".to_string(), "elevator".to_string()];
        let context = [
            PromptContext { content: "Hotel A", features: &features },
            PromptContext { content: "Beach B", features: &[] },
        ];
        assert_eq!(
            context_lines(&context),
            "- Hotel A (Accessibility: ramp, elevator)\n- Beach B"
        );
    }

    #[test]
    fn test_itinerary_prompt_contains_inputs() {
        let prefs = json!({"location": "north", "budget": "medium"});
        let context = [PromptContext { content: "Grand Baie beach", features: &[] }];
        let prompt = itinerary_prompt(&prefs, &context);
        assert!(prompt.starts_with(PERSONA));
        assert!(prompt.contains(r#""location":"north""#));
        assert!(prompt.contains("- Grand Baie beach"));
        assert!(prompt.contains("hotel_recommendation"));
    }

    #[test]
    fn test_recommendations_prompt() {
        let context = [PromptContext { content: "Chamarel", features: &[] }];
        let prompt = recommendations_prompt(&context);
        assert!(prompt.contains("- Chamarel"));
        assert!(prompt.contains("\"recommendations\""));
    }
}
