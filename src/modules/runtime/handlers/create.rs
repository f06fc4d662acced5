//! Database creation handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use orbit_http_core::{
    AccessOptions, CreateResponse, DatabaseHandle, DatabaseType, OrbitHttpError,
};
use tracing::{debug, error, info};

use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for database creation requests
pub struct CreateHandler;

impl CreateHandler {
    /// Handle GET /create/{type}/{name}
    pub async fn handle(
        State(state): State<AppState>,
        Path((db_type, name)): Path<(String, String)>,
    ) -> impl IntoResponse {
        info!("Opening database: {}/{}", db_type, name);

        match Self::open(&state, &db_type, &name).await {
            Ok(handle) => {
                info!("Database open at {}", handle.address);
                (StatusCode::OK, Json(CreateResponse::success(handle)))
            }
            Err(e) => {
                if e.is_client_error() {
                    debug!("Create '{}/{}' rejected: {}", db_type, name, e);
                } else {
                    error!("Create '{}/{}' failed: {}", db_type, name, e);
                }
                (status_for(&e), Json(CreateResponse::error(e.sanitized_message())))
            }
        }
    }

    /// Validate the request parameters and delegate to the engine
    async fn open(
        state: &AppState,
        db_type: &str,
        name: &str,
    ) -> Result<DatabaseHandle, OrbitHttpError> {
        let db_type: DatabaseType = db_type.parse()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(OrbitHttpError::Validation(
                "database name must not be empty".to_string(),
            ));
        }
        if name.contains('/') {
            return Err(OrbitHttpError::Validation(
                "database name must not contain '/'".to_string(),
            ));
        }

        state
            .engine
            .open_or_create(db_type, name, &AccessOptions::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_router;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use orbit_http_core::EngineOptions;
    use tower::ServiceExt;

    async fn test_router() -> axum::Router {
        let (engine, _handle) = orbit_http_engine::start(&EngineOptions::default())
            .await
            .unwrap();
        build_router(AppState::new(engine))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_address() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/create/eventlog/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], serde_json::json!(true));
        let address = body["address"].as_str().unwrap();
        assert!(address.starts_with("/orbitdb/"));
        assert!(address.ends_with("/test"));
    }

    #[tokio::test]
    async fn test_create_is_idempotent() {
        let app = test_router().await;

        let mut addresses = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/create/keyvalue/settings")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            addresses.push(body_json(response).await["address"].clone());
        }
        assert_eq!(addresses[0], addresses[1]);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_type() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/create/graph/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(body["error"], serde_json::json!("Invalid database type: graph"));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/create/eventlog/%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
