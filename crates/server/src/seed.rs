//! Demo content loaded into the store at startup.

use wanderwise_vector::{DocumentMetadata, NewDocument};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

struct Attraction<'a> {
    name: &'a str,
    kind: &'a str,
    best_time: &'a str,
    location: &'a str,
    activity: &'a str,
    description: &'a str,
    features: &'a [&'a str],
    accessible: Option<bool>,
}

impl Attraction<'_> {
    fn into_document(self, content: &str) -> NewDocument {
        NewDocument::new(
            content,
            DocumentMetadata {
                name: Some(self.name.to_string()),
                category: Some("attraction".to_string()),
                kind: Some(self.kind.to_string()),
                best_time: Some(self.best_time.to_string()),
                location: Some(self.location.to_string()),
                activity: Some(self.activity.to_string()),
                description: Some(self.description.to_string()),
                features: strings(self.features),
                accessible: self.accessible,
                ..Default::default()
            },
        )
    }
}

fn hotel(
    content: &str,
    name: &str,
    location: &str,
    price_range: &str,
    description: &str,
    features: &[&str],
    accessible: Option<bool>,
) -> NewDocument {
    NewDocument::new(
        content,
        DocumentMetadata {
            name: Some(name.to_string()),
            category: Some("hotel".to_string()),
            kind: Some("Hotel".to_string()),
            location: Some(location.to_string()),
            price_range: Some(price_range.to_string()),
            description: Some(description.to_string()),
            features: strings(features),
            accessible,
            ..Default::default()
        },
    )
}

/// Six attractions and four hotels around the island
pub fn demo_documents() -> Vec<NewDocument> {
    vec![
        Attraction {
            name: "Chamarel Seven Colored Earth",
            kind: "Geological Formation",
            best_time: "Morning",
            location: "South",
            activity: "sightseeing",
            description: "Seven colored sand dunes in Chamarel",
            features: &["step-free viewpoint", "ramp"],
            accessible: Some(true),
        }
        .into_document(
            "Chamarel Seven Colored Earth is a unique geological formation with sand dunes of seven distinct colors. Best visited in the morning to avoid crowds. Located in Chamarel, Mauritius.",
        ),
        Attraction {
            name: "Pamplemousses Botanical Garden",
            kind: "Nature",
            best_time: "Morning",
            location: "North",
            activity: "walking",
            description: "Botanical garden with giant water lilies",
            features: &["wheelchair-accessible paths", "accessible restrooms"],
            accessible: Some(true),
        }
        .into_document(
            "Pamplemousses Botanical Garden, also known as Sir Seewoosagur Ramgoolam Botanical Garden, features giant water lilies and diverse tropical plants. Great for nature lovers.",
        ),
        Attraction {
            name: "Flic en Flac Beach",
            kind: "Beach",
            best_time: "Evening",
            location: "West",
            activity: "beach",
            description: "Popular beach with great sunsets",
            features: &["beach wheelchair access near main entrance"],
            accessible: None,
        }
        .into_document(
            "Flic en Flac Beach on the West Coast offers white sand and clear waters ideal for swimming and snorkeling. Beautiful sunsets in the evening.",
        ),
        Attraction {
            name: "Grand Baie",
            kind: "Beach",
            best_time: "Morning",
            location: "North",
            activity: "beach",
            description: "Lively coastal village in the North",
            features: &["ramp access at promenade"],
            accessible: None,
        }
        .into_document(
            "Grand Baie in the North is a popular coastal village known for beaches like La Cuvette and Pereybere, with lively restaurants and shopping.",
        ),
        Attraction {
            name: "Belle Mare Beach",
            kind: "Beach",
            best_time: "Morning",
            location: "East",
            activity: "beach",
            description: "Long white sand beach with calm lagoon",
            features: &["parking close to beach entrance"],
            accessible: None,
        }
        .into_document(
            "Belle Mare on the East coast offers long stretches of white sand and a calm lagoon ideal for swimming and water sports.",
        ),
        Attraction {
            name: "Ile aux Cerfs",
            kind: "Island",
            best_time: "Morning",
            location: "East",
            activity: "beach",
            description: "East coast island with water activities",
            features: &["assistance available for boarding boats"],
            accessible: None,
        }
        .into_document(
            "Ile aux Cerfs is a small island on the East known for its turquoise waters, beach clubs, and water activities; accessible by boat from Trou d'Eau Douce.",
        ),
        hotel(
            "LUX Grand Gaube is a luxury beachfront resort in the North with multiple pools, dining options, and spa facilities.",
            "LUX Grand Gaube",
            "North",
            "$$$",
            "Luxury beachfront resort",
            &["elevator", "step-free access", "accessible rooms"],
            Some(true),
        ),
        hotel(
            "The St. Regis Mauritius Resort is a luxury property near Le Morne in the South, offering ocean-view rooms and fine dining.",
            "The St. Regis Mauritius Resort",
            "South",
            "$$$",
            "Luxury resort near Le Morne",
            &["ramp", "elevator", "accessible bathrooms"],
            Some(true),
        ),
        hotel(
            "SALT of Palmar is a boutique hotel on the East coast focusing on local experiences and cuisine.",
            "SALT of Palmar",
            "East",
            "$$",
            "Boutique hotel on the East coast",
            &["step-free lobby"],
            None,
        ),
        hotel(
            "La Pirogue is a beachfront resort in Flic en Flac on the West, known for coconut groves and sunset views.",
            "La Pirogue",
            "West",
            "$$",
            "Beachfront resort in Flic en Flac",
            &["ground-floor rooms available"],
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanderwise_vector::{matches_filter, SearchFilter};

    #[test]
    fn test_demo_documents() {
        let docs = demo_documents();
        assert_eq!(docs.len(), 10);

        let hotels = SearchFilter::default().with_category("hotel");
        let hotel_count = docs
            .iter()
            .filter(|d| matches_filter(&d.metadata, Some(&hotels)))
            .count();
        assert_eq!(hotel_count, 4);
    }

    #[test]
    fn test_demo_documents_cover_every_region() {
        let docs = demo_documents();
        for region in ["north", "south", "east", "west"] {
            let filter = SearchFilter::default().with_location(region);
            assert!(
                docs.iter().any(|d| matches_filter(&d.metadata, Some(&filter))),
                "no document in {}",
                region
            );
        }
    }
}
