use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use wanderwise_common::WanderWiseError;

use crate::types::ErrorResponse;

/// HTTP-facing wrapper around [`WanderWiseError`]
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub WanderWiseError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.0.to_string(),
        })
    }
}
