use std::time::Duration;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::*;

/// Shared handler settings
#[derive(Debug, Clone)]
pub struct ServerState {
    pub ack_delay: Duration,
}

impl ServerState {
    pub fn new(ack_delay: Duration) -> Self {
        Self { ack_delay }
    }
}

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/api/location", post(receive_location))
        .route("/api/location-services", post(receive_location))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(16 * 1024)) // 16KB limit
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
