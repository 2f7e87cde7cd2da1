//! Metadata filtering for retrieval.
//!
//! A [`SearchFilter`] is a conjunction of optional clauses; each populated
//! clause must pass for a document to be a search candidate.

use crate::types::{DocumentMetadata, SearchFilter};

/// Coarse geographic bucket of the island
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    North,
    South,
    East,
    West,
}

/// Result of bucketing a place name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionBucket {
    Known(Region),
    /// Place not in any bucket list; holds the lowercased input
    Unlisted(String),
}

// Checked in order; the first bucket with a matching substring wins.
// The lists are known to be incomplete: unlisted places fall through to
// `RegionBucket::Unlisted` and only match an identical unlisted place.
const REGION_KEYWORDS: &[(Region, &[&str])] = &[
    (
        Region::North,
        &["north", "grand baie", "pamplemousses", "trou aux biches", "pereybere"],
    ),
    (
        Region::South,
        &["south", "le morne", "bel ombre", "souillac", "mahebourg", "blue bay", "chamarel"],
    ),
    (
        Region::East,
        &["east", "belle mare", "ile aux cerfs", "trou d eau douce", "flacq"],
    ),
    (
        Region::West,
        &["west", "tamarin", "flic en flac", "black river", "rivière noire"],
    ),
];

const ACTIVITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("beach", &["beach", "snorkel", "snorkeling", "coast", "sea", "sunset", "lagoon"]),
    ("hiking", &["hike", "hiking", "trail", "mountain", "brabant", "le morne", "walk", "trek"]),
    (
        "culture",
        &["culture", "cultural", "museum", "temple", "historic", "heritage", "church", "local village"],
    ),
    ("food", &["food", "restaurant", "cuisine", "dining", "street food", "seafood"]),
    ("shopping", &["shopping", "market", "bazaar", "mall", "craft", "souvenir"]),
    (
        "wildlife",
        &["wildlife", "park", "reserve", "turtle", "dolphin", "bird", "botanical", "garden", "nature"],
    ),
];

const ACCESSIBILITY_KEYWORDS: &[&str] = &[
    "accessible",
    "wheelchair",
    "wheel-chair",
    "ramp",
    "elevator",
    "lift",
    "step-free",
    "no stairs",
    "disabled",
];

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

/// Map a place name to its region bucket
///
/// Returns `None` for empty input.
pub fn region_bucket(place: &str) -> Option<RegionBucket> {
    let place = place.to_lowercase();
    if place.is_empty() {
        return None;
    }

    let bucket = REGION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| place.contains(kw)))
        .map(|(region, _)| RegionBucket::Known(*region))
        .unwrap_or(RegionBucket::Unlisted(place));

    Some(bucket)
}

/// Keywords an activity key expands to; unknown keys expand to themselves
pub fn activity_keywords(activity: &str) -> Vec<String> {
    let key = activity.to_lowercase();
    match ACTIVITY_KEYWORDS.iter().find(|(name, _)| *name == key) {
        Some((_, keywords)) => keywords.iter().map(|kw| kw.to_string()).collect(),
        None => vec![key],
    }
}

/// Heuristic accessibility detection
pub fn is_accessible(metadata: &DocumentMetadata) -> bool {
    if metadata.accessible == Some(true) {
        return true;
    }

    let mentions_access = |text: &str| {
        let text = text.to_lowercase();
        ACCESSIBILITY_KEYWORDS.iter().any(|kw| text.contains(kw))
    };

    if metadata.features.iter().any(|f| mentions_access(f.as_str())) {
        return true;
    }

    [
        &metadata.description,
        &metadata.notes,
        &metadata.name,
        &metadata.kind,
    ]
    .into_iter()
    .flatten()
    .any(|text| mentions_access(text.as_str()))
}

fn matches_location(metadata: &DocumentMetadata, wanted: &str) -> bool {
    match (
        region_bucket(wanted),
        region_bucket(metadata.location.as_deref().unwrap_or_default()),
    ) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => false,
    }
}

fn matches_activities(metadata: &DocumentMetadata, activities: &[String]) -> bool {
    let fields: Vec<String> = [
        &metadata.kind,
        &metadata.activity,
        &metadata.name,
        &metadata.location,
        &metadata.description,
    ]
    .into_iter()
    .map(|field| normalize(field.as_deref()))
    .filter(|field| !field.is_empty())
    .collect();

    activities.iter().any(|activity| {
        let keywords = activity_keywords(activity);
        fields
            .iter()
            .any(|field| keywords.iter().any(|kw| field.contains(kw.as_str())))
    })
}

/// Check if a document's metadata passes the filter
///
/// `None` passes everything.
pub fn matches_filter(metadata: &DocumentMetadata, filter: Option<&SearchFilter>) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    if let Some(location) = filter.location.as_deref().filter(|l| !l.is_empty()) {
        if !matches_location(metadata, location) {
            return false;
        }
    }

    if !filter.activity_types.is_empty() && !matches_activities(metadata, &filter.activity_types) {
        return false;
    }

    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        let wanted = category.to_lowercase();
        if normalize(metadata.category.as_deref()) != wanted
            && normalize(metadata.kind.as_deref()) != wanted
        {
            return false;
        }
    }

    if let Some(kind) = filter.kind.as_deref().filter(|k| !k.is_empty()) {
        if normalize(metadata.kind.as_deref()) != kind.to_lowercase() {
            return false;
        }
    }

    if filter.accessible && !is_accessible(metadata) {
        return false;
    }

    true
}
