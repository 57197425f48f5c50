/// Signup and login endpoints
///
/// Both are mounted under `/user` and `/users`.
///
/// # Endpoints
///
/// - `POST /user/signup` - Create an account and receive an access token
/// - `POST /user/login` - Exchange email and password for the access token

use crate::{
    app::AppState,
    error::{ApiResponse, ApiResult},
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use thoughts_shared::models::user::UserView;
use validator::Validate;

/// Signup request
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password, at least 6 characters
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /user/signup
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "secret1" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "response": { "email": "ada@example.com", "id": "…", "accessToken": "…" },
///   "message": "User created successfully"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: malformed body, invalid email, short password, or
///   email already registered
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<UserView>>> {
    let Json(mut req) = body?;

    // Surrounding whitespace is normalized away, not a format error
    req.email = req.email.trim().to_string();
    req.validate()?;

    let user = state.accounts.signup(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(user, "User created successfully")))
}

/// Login with email and password
///
/// # Errors
///
/// - `400 Bad Request`: malformed body
/// - `401 Unauthorized`: "Invalid email or password", whether the email is
///   unknown or the password is wrong
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<UserView>>> {
    let Json(req) = body?;

    let user = state.accounts.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(user, "Login successful")))
}
