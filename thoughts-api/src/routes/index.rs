/// Welcome document and the envelope-shaped 404 fallback

use crate::error::{ApiError, ApiResponse};
use axum::{
    http::{Method, Uri},
    Json,
};
use serde::Serialize;

/// One routable endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub methods: &'static [&'static str],
}

/// Payload of `GET /`
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub version: &'static str,
    pub endpoints: &'static [EndpointInfo],
}

/// Every route the router serves
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo { path: "/", methods: &["GET"] },
    EndpointInfo { path: "/health", methods: &["GET"] },
    EndpointInfo { path: "/user/signup", methods: &["POST"] },
    EndpointInfo { path: "/user/login", methods: &["POST"] },
    EndpointInfo { path: "/users/signup", methods: &["POST"] },
    EndpointInfo { path: "/users/login", methods: &["POST"] },
    EndpointInfo { path: "/thoughts", methods: &["GET", "POST"] },
    EndpointInfo { path: "/thoughts/:id", methods: &["GET", "PATCH", "DELETE"] },
    EndpointInfo { path: "/thoughts/:id/like", methods: &["PATCH"] },
];

/// Lists the available endpoints
///
/// ```text
/// GET /
/// ```
pub async fn welcome() -> Json<ApiResponse<WelcomeResponse>> {
    Json(ApiResponse::ok(
        WelcomeResponse {
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS,
        },
        "Welcome to the Happy Thoughts API",
    ))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}
