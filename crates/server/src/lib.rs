//! WanderWise HTTP Server
//!
//! Actix-web REST API over the retrieval store and itinerary generator

pub mod error;
pub mod rag;
pub mod routes;
pub mod seed;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpServer, Scope};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use wanderwise_common::{AppConfig, Result, WanderWiseError};

pub use error::ApiError;
pub use rag::RagService;
pub use state::AppState;

/// All routes under `/api`
pub fn api_scope() -> Scope {
    web::scope("/api").configure(routes::configure)
}

/// JSON extractor config answering malformed bodies with `{ "error": ... }`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::from(WanderWiseError::invalid_input(err.to_string())).into()
    })
}

/// Add the demo documents in the background
///
/// Requests arriving meanwhile see a partially seeded store.
pub fn spawn_seeding(state: &AppState) -> tokio::task::JoinHandle<usize> {
    let engine = state.vector_search.clone();
    tokio::spawn(async move {
        let added = engine.add_documents(seed::demo_documents()).await;
        info!("Vector store seeded with {} demo documents", added);
        added
    })
}

/// Run the HTTP server until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let cors_origin = config.cors_origin.clone();
    let seed = config.seed_demo_data;

    let state = Arc::new(AppState::new(config)?);
    if seed {
        spawn_seeding(&state);
    } else {
        warn!("Demo seeding disabled - store starts empty");
    }

    let data = web::Data::new(state);

    info!("Starting HTTP server on {}", bind_addr);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            .app_data(json_config())
            .service(api_scope())
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
