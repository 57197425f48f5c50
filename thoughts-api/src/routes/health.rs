/// Health check endpoint
///
/// Verifies that the server is running and the thought store is reachable.
/// Always answers 200; a store outage shows up as `"degraded"`.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "response": { "status": "healthy", "version": "0.1.0", "database": "connected" },
///   "message": "Success"
/// }
/// ```

use crate::{app::AppState, error::ApiResponse};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Store status
    pub database: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database_status = match state.thoughts.store().health_check().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            "disconnected"
        }
    };

    Json(ApiResponse::ok(
        HealthResponse {
            status: if database_status == "connected" {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_status.to_string(),
        },
        "Success",
    ))
}
