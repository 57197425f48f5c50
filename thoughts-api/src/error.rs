/// Error handling and the JSON response envelope
///
/// Every response body, success or failure, has the same shape:
///
/// ```json
/// { "success": false, "response": null, "message": "Thought not found" }
/// ```
///
/// Handlers return `ApiResult<T>`; errors convert into the envelope with the
/// matching status code. Internal errors are logged and answered with a
/// generic message so no internal detail reaches the client.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use thoughts_api::error::{ApiResponse, ApiResult};
///
/// async fn handler() -> ApiResult<Json<ApiResponse<&'static str>>> {
///     Ok(Json(ApiResponse::ok("pong", "Success")))
/// }
/// ```

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thoughts_shared::{auth::authenticator::AuthError, services::ServiceError};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Message sent in place of internal error details
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Payload, or null
    pub response: Option<T>,

    /// Human-readable outcome
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `response`
    pub fn ok(response: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response),
            message: message.into(),
        }
    }

    /// Failed envelope with an explicit payload
    pub fn failure(response: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            response,
            message: message.into(),
        }
    }
}

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400): malformed body, invalid id, validation failure
    BadRequest(String),

    /// Unauthorized (401)
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Uniqueness violation, reported as 400
    Conflict(String),

    /// Method not allowed (405)
    MethodNotAllowed(String),

    /// Internal server error (500)
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::MethodNotAllowed(msg) => msg,
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        let body = Json(ApiResponse::<()>::failure(None, message));

        (status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::InvalidId => ApiError::BadRequest(ServiceError::InvalidId.to_string()),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            ServiceError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}

/// Every rejection looks the same to the client; only store failures differ
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials
            | AuthError::InvalidFormat(_)
            | AuthError::Unauthorized => ApiError::Unauthorized("Unauthorized".to_string()),
            AuthError::Store(store_err) => {
                ApiError::InternalError(format!("Credential lookup failed: {}", store_err))
            }
        }
    }
}

/// Malformed or missing JSON bodies keep the envelope instead of axum's plain text
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convert request validation failures into a single 400 message
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<(String, String)> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    (
                        field.to_string(),
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid {}", field)),
                    )
                })
            })
            .collect();
        messages.sort();

        ApiError::BadRequest(
            messages
                .into_iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
