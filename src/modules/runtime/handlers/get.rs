//! Database query handler

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use orbit_http_core::{DatabaseAddress, OrbitHttpError, QueryParams, QueryResponse};
use std::collections::HashMap;
use tracing::{debug, error, info};

use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for database query requests
pub struct GetHandler;

impl GetHandler {
    /// Handle GET /orbitdb/{*address}
    ///
    /// The wildcard carries everything after the `/orbitdb/` prefix; the full
    /// address is reassembled before parsing.
    pub async fn handle(
        State(state): State<AppState>,
        Path(rest): Path<String>,
        Query(raw_params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let address = format!("/orbitdb/{}", rest);
        info!("Querying database: {}", address);

        match Self::query(&state, &address, &raw_params).await {
            Ok(results) => {
                info!("Query of {} returned {} entries", address, results.len());
                (StatusCode::OK, Json(QueryResponse::success(results)))
            }
            Err(e) => {
                if e.is_client_error() {
                    debug!("Query of {} rejected: {}", address, e);
                } else {
                    error!("Query of {} failed: {}", address, e);
                }
                (status_for(&e), Json(QueryResponse::error(e.sanitized_message())))
            }
        }
    }

    /// Parse the address and parameters, then delegate to the engine
    async fn query(
        state: &AppState,
        address: &str,
        raw_params: &HashMap<String, String>,
    ) -> Result<Vec<serde_json::Value>, OrbitHttpError> {
        let address: DatabaseAddress = address.parse()?;
        let params = QueryParams::from_pairs(raw_params)?;
        state.engine.query(&address, &params).await
    }
}
