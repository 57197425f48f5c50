/// Thought endpoints
///
/// Reads and likes are public. Create, update and delete take an
/// [`AuthenticatedUser`], which is extracted before the JSON body, so an
/// unauthenticated request is rejected with 401 whatever its body holds.
///
/// # Endpoints
///
/// - `GET /thoughts?hearts=N` - List thoughts, newest first
/// - `POST /thoughts` - Create a thought (bearer)
/// - `GET /thoughts/:id` - Fetch one thought
/// - `PATCH /thoughts/:id` - Replace the message (bearer)
/// - `DELETE /thoughts/:id` - Delete a thought (bearer)
/// - `PATCH /thoughts/:id/like` - Add one heart

use crate::{
    app::AppState,
    error::{ApiResponse, ApiResult},
    middleware::auth::AuthenticatedUser,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use thoughts_shared::{models::thought::Thought, services::validation::parse_min_hearts};

/// Message returned with an empty list
pub const NO_THOUGHTS_FOUND: &str = "No thoughts found for that query. Try another one!";

/// Query parameters for listing
#[derive(Debug, Default, Deserialize)]
pub struct ListThoughtsQuery {
    /// Minimum hearts; kept as text so odd values disable the filter
    /// instead of failing the request
    pub hearts: Option<String>,
}

/// Body for create and update
///
/// A missing `message` is treated like an empty one and fails validation
/// with "A message is required".
#[derive(Debug, Default, Deserialize)]
pub struct ThoughtRequest {
    pub message: Option<String>,
}

type ThoughtResponse = Json<ApiResponse<Thought>>;

/// List thoughts
///
/// An empty result is answered with 404 and `"response": []`.
pub async fn list_thoughts(
    State(state): State<AppState>,
    query: Result<Query<ListThoughtsQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Vec<Thought>>>)> {
    let Query(query) = query?;
    let min_hearts = parse_min_hearts(query.hearts.as_deref());

    let thoughts = state.thoughts.list(min_hearts).await?;

    if thoughts.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::failure(Some(thoughts), NO_THOUGHTS_FOUND)),
        ));
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(thoughts, "Success"))))
}

pub async fn get_thought(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<ThoughtResponse> {
    let Path(id) = id?;
    let thought = state.thoughts.get_by_id(&id).await?;

    Ok(Json(ApiResponse::ok(thought, "Success")))
}

/// Create a thought
///
/// # Endpoint
///
/// ```text
/// POST /thoughts
/// Authorization: Bearer <accessToken>
/// Content-Type: application/json
///
/// { "message": "Sunshine after three days of rain" }
/// ```
///
/// Responds `201 Created` with the new thought.
pub async fn create_thought(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    body: Result<Json<ThoughtRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, ThoughtResponse)> {
    let Json(req) = body?;
    let message = req.message.unwrap_or_default();

    let thought = state.thoughts.create(&principal, &message).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(thought, "Thought created successfully")),
    ))
}

pub async fn update_thought(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<ThoughtRequest>, JsonRejection>,
) -> ApiResult<ThoughtResponse> {
    let Path(id) = id?;
    let Json(req) = body?;
    let message = req.message.unwrap_or_default();

    let thought = state.thoughts.update(&principal, &id, &message).await?;

    Ok(Json(ApiResponse::ok(thought, "Thought updated successfully")))
}

/// Delete a thought and return its last state
pub async fn delete_thought(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<ThoughtResponse> {
    let Path(id) = id?;
    let thought = state.thoughts.delete(&principal, &id).await?;

    Ok(Json(ApiResponse::ok(thought, "Thought deleted successfully")))
}

/// Add one heart; no token required
pub async fn like_thought(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<ThoughtResponse> {
    let Path(id) = id?;
    let thought = state.thoughts.like(&id).await?;

    Ok(Json(ApiResponse::ok(thought, "Thought liked successfully")))
}
