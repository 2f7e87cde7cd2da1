use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use wanderwise_common::AppConfig;
use wanderwise_server::{api_scope, json_config, spawn_seeding, AppState};

async fn seeded_state() -> Arc<AppState> {
    let state = Arc::new(AppState::with_providers(AppConfig::default(), None, None));
    let added = spawn_seeding(&state).await.expect("seeding task panicked");
    assert_eq!(added, 10);
    state
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(json_config())
                .service(api_scope()),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = app!(seeded_state().await);
    let req = test::TestRequest::get().uri("/api/test").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"message": "Backend is working!"}));
}

#[actix_web::test]
async fn test_search_with_filters() {
    let app = app!(seeded_state().await);
    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(json!({
            "query": "luxury resort",
            "k": 5,
            "filters": {"category": "hotel", "location": "south"}
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 1);
    let first = &body["results"][0];
    assert_eq!(first["metadata"]["name"], "The St. Regis Mauritius Resort");
    assert_eq!(first["path"], "keyword");
    assert_eq!(first["similarity"], 2.0);
}

#[actix_web::test]
async fn test_search_defaults_to_three_results() {
    let app = app!(seeded_state().await);
    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(json!({"query": "beach"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 3);
}

#[actix_web::test]
async fn test_unknown_filter_key_is_rejected() {
    let app = app!(seeded_state().await);
    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(json!({"query": "beach", "filters": {"regoin": "north"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Invalid input:"), "{}", message);
    assert!(message.contains("regoin"), "{}", message);
}

#[actix_web::test]
async fn test_add_documents_and_stats() {
    let app = app!(Arc::new(AppState::with_providers(AppConfig::default(), None, None)));

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({
            "documents": [
                {"content": "Beach resort in the North", "metadata": {"location": "North", "category": "hotel"}},
                {"content": "Hiking trail in the South", "metadata": {"location": "South", "category": "attraction"}}
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"added": 2, "total": 2}));

    let req = test::TestRequest::get().uri("/api/store/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"total_documents": 2, "embedded_documents": 0, "embedding_model": null})
    );

    let req = test::TestRequest::post()
        .uri("/api/search")
        .set_json(json!({"query": "resort", "k": 5, "filters": {"category": "hotel"}}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["content"], "Beach resort in the North");
}

#[actix_web::test]
async fn test_itinerary_fallback() {
    let app = app!(seeded_state().await);
    let req = test::TestRequest::post()
        .uri("/api/itinerary")
        .set_json(json!({"location": "west", "activityTypes": ["beach"], "budget": "low"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["destination"], "west");
    assert_eq!(body["itinerary"][0]["location"], "West");
    assert_eq!(body["hotel_recommendation"]["name"], "La Pirogue");
    assert_eq!(body["hotel_recommendation"]["price_range"], "$$");
}

#[actix_web::test]
async fn test_recommendations_fallback() {
    let app = app!(seeded_state().await);
    let req = test::TestRequest::get().uri("/api/recommendations").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(3));
}
