use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{dashboard::dashboard_handler, itinerary::itinerary_handler, state::AppState};

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/dashboard", post(dashboard_handler))
        .route("/itinerary", post(itinerary_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
