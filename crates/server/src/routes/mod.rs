use actix_web::web;

mod itinerary;
mod search;
mod system;

/// Register all `/api` routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(itinerary::itinerary)
        .service(itinerary::recommendations)
        .service(search::search)
        .service(search::add_documents)
        .service(search::store_stats)
        .service(system::health);
}
