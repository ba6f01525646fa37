use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use super::models::*;
use super::routes::ServerState;

/// Logs a submitted location and acknowledges it after the configured delay
///
/// Stricter than a plain echo: a payload whose coordinate is non-finite or
/// out of range is refused with 400 instead of being acknowledged.
pub async fn receive_location(
    State(state): State<ServerState>,
    Json(payload): Json<LocationPayload>,
) -> Result<Json<Acknowledgement>, (StatusCode, Json<ErrorResponse>)> {
    let coord = payload.coordinate().map_err(|e| {
        warn!(
            latitude = payload.latitude,
            longitude = payload.longitude,
            "Rejected location: {}",
            e
        );
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    info!(
        latitude = coord.latitude(),
        longitude = coord.longitude(),
        "Received location"
    );

    if !state.ack_delay.is_zero() {
        tokio::time::sleep(state.ack_delay).await;
    }

    Ok(Json(Acknowledgement {
        message: ACK_MESSAGE.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::api::create_router;

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_acknowledges_valid_payload() {
        let app = create_router(ServerState::new(Duration::ZERO));
        let response = app
            .oneshot(post("/api/location", r#"{"latitude": 40.0, "longitude": -73.0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let ack: Acknowledgement = serde_json::from_slice(&body).unwrap();
        assert_eq!(ack.message, ACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_legacy_route_is_served() {
        let app = create_router(ServerState::new(Duration::ZERO));
        let response = app
            .oneshot(post("/api/location-services", r#"{"latitude": 0.0, "longitude": 0.0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_out_of_range() {
        let app = create_router(ServerState::new(Duration::ZERO));
        let response = app
            .oneshot(post("/api/location", r#"{"latitude": 123.0, "longitude": 0.0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(err.error.contains("latitude"));
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let app = create_router(ServerState::new(Duration::ZERO));
        let response = app.oneshot(post("/api/location", "not json")).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_waits_out_ack_delay() {
        let app = create_router(ServerState::new(Duration::from_millis(50)));
        let start = Instant::now();
        let response = app
            .oneshot(post("/api/location", r#"{"latitude": 1.0, "longitude": 2.0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
