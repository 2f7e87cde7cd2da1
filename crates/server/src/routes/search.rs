use actix_web::{get, post, web, HttpResponse};
use tracing::info;

use crate::state::AppState;
use crate::types::{
    AddDocumentsRequest, AddDocumentsResponse, SearchRequest, SearchResponse, StatsResponse,
};

/// Ranked store search
#[post("/search")]
pub async fn search(
    req: web::Json<SearchRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let req = req.into_inner();

    let results = state
        .vector_search
        .search(&req.query, req.k, req.filters.as_ref())
        .await;

    let count = results.len();
    Ok(HttpResponse::Ok().json(SearchResponse {
        query: req.query,
        count,
        results,
    }))
}

/// Bulk insert documents
#[post("/documents")]
pub async fn add_documents(
    req: web::Json<AddDocumentsRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let documents = req.into_inner().documents;
    info!("Adding {} documents via API", documents.len());

    let added = state.vector_search.add_documents(documents).await;
    let total = state.vector_search.store().len().await;

    Ok(HttpResponse::Ok().json(AddDocumentsResponse { added, total }))
}

#[get("/store/stats")]
pub async fn store_stats(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let stats: StatsResponse = state.vector_search.stats().await;
    Ok(HttpResponse::Ok().json(stats))
}
