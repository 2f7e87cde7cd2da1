use actix_web::{get, post, web, HttpResponse};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::ItineraryPreferences;

/// Generate a personalized itinerary
#[post("/itinerary")]
pub async fn itinerary(
    req: web::Json<ItineraryPreferences>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    info!(
        "Itinerary requested - location: {:?}, activities: {:?}",
        req.location, req.activity_types
    );

    let itinerary = state.rag.generate_itinerary(&req).await?;
    Ok(HttpResponse::Ok().json(itinerary))
}

/// Top attraction recommendations
#[get("/recommendations")]
pub async fn recommendations(
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let recommendations = state.rag.top_recommendations().await?;
    Ok(HttpResponse::Ok().json(recommendations))
}
