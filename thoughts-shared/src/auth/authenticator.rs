/// Bearer token authentication
///
/// The [`Authenticator`] turns a raw `Authorization` header value into a
/// [`Principal`] by looking up the user that owns the presented access token.
///
/// # Outcomes
///
/// | Header                         | Lookup? | Result                        |
/// |--------------------------------|---------|-------------------------------|
/// | absent                         | no      | `AuthError::MissingCredentials` |
/// | not `Bearer <token>`           | no      | `AuthError::InvalidFormat`    |
/// | `Bearer <token>`, no owner     | yes     | `AuthError::Unauthorized`     |
/// | `Bearer <token>`, owner found  | yes     | `Ok(Principal)`               |
/// | store failure                  | yes     | `AuthError::Store`            |
///
/// The lookup is read-only. Callers receive the principal as a value and
/// pass it on explicitly; nothing is attached to shared request state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use thoughts_shared::auth::authenticator::{AuthError, Authenticator};
/// use thoughts_shared::store::memory::MemoryStore;
///
/// # async fn example() {
/// let authenticator = Authenticator::new(Arc::new(MemoryStore::new()));
///
/// let result = authenticator.authenticate(Some("Token abc")).await;
/// assert!(matches!(result, Err(AuthError::InvalidFormat(_))));
/// # }
/// ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::user::User;
use crate::store::{StoreError, UserStore};

/// Scheme prefix expected in the `Authorization` header
const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated identity resolved from an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Error type for authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header was sent
    #[error("Missing credentials")]
    MissingCredentials,

    /// The header is not of the form `Bearer <token>`
    #[error("Invalid authorization header: {0}")]
    InvalidFormat(String),

    /// No user owns the presented token
    #[error("Unauthorized")]
    Unauthorized,

    /// The credential store could not be queried
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Extracts the token from a `Bearer <token>` header value
///
/// ```
/// use thoughts_shared::auth::authenticator::parse_bearer;
///
/// assert_eq!(parse_bearer("Bearer abc").unwrap(), "abc");
/// assert!(parse_bearer("Basic abc").is_err());
/// assert!(parse_bearer("Bearer ").is_err());
/// ```
pub fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidFormat("Empty bearer token".to_string()));
    }

    Ok(token)
}

/// Validates bearer credentials against the credential store
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserStore>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Resolves the raw `Authorization` header value to a principal
    ///
    /// # Errors
    ///
    /// See the module-level table. Only `AuthError::Store` represents an
    /// internal failure; every other variant is a rejection.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Principal, AuthError> {
        let header = header.ok_or(AuthError::MissingCredentials)?;
        let token = parse_bearer(header)?;

        match self.users.find_user_by_access_token(token).await? {
            Some(user) => {
                debug!(user_id = %user.id, "Authenticated request");
                Ok(Principal::from(&user))
            }
            None => {
                warn!("Rejected request with unknown access token");
                Err(AuthError::Unauthorized)
            }
        }
    }
}
