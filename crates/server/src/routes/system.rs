use actix_web::{get, HttpResponse};

use crate::types::MessageResponse;

/// Liveness check
#[get("/test")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Backend is working!".to_string(),
    })
}
