/// Bearer authentication extractor
///
/// Protected handlers take an [`AuthenticatedUser`] argument. The extractor
/// hands the raw `Authorization` header to the shared `Authenticator` and
/// either yields the resolved principal or rejects the request with a 401
/// envelope before the handler (and its body extractor) runs.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::post, Router};
/// use thoughts_api::{app::AppState, middleware::auth::AuthenticatedUser};
///
/// async fn whoami(AuthenticatedUser(principal): AuthenticatedUser) -> String {
///     principal.email
/// }
///
/// # fn router() -> Router<AppState> {
/// Router::new().route("/whoami", post(whoami))
/// # }
/// ```

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use thoughts_shared::auth::authenticator::{AuthError, Principal};

use crate::{app::AppState, error::ApiError};

/// Principal of an authenticated request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .map(|value| {
                value.to_str().map_err(|_| {
                    AuthError::InvalidFormat("Authorization header is not valid text".to_string())
                })
            })
            .transpose()?;

        let principal = state.authenticator.authenticate(header).await?;

        Ok(AuthenticatedUser(principal))
    }
}
