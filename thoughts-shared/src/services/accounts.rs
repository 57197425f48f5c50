/// Signup and login
///
/// Signup issues the credential (an access token) and login verifies a
/// password to hand the same token back. Tokens never change once issued.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use thoughts_shared::services::accounts::AccountService;
/// use thoughts_shared::store::memory::MemoryStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let accounts = AccountService::new(Arc::new(MemoryStore::new()));
///
/// let created = accounts.signup("Ada@Example.com", "secret1").await?;
/// assert_eq!(created.email, "ada@example.com");
///
/// let logged_in = accounts.login("ada@example.com", "secret1").await?;
/// assert_eq!(logged_in.access_token, created.access_token);
/// # Ok(())
/// # }
/// ```

use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use super::error::{ServiceError, ServiceResult};
use super::validation::normalize_email;
use crate::auth::{password, token::generate_access_token};
use crate::models::user::{CreateUser, UserView};
use crate::store::{StoreError, UserStore};

/// Message returned for every failed login, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Message returned when the email is already registered
pub const EMAIL_TAKEN: &str = "User with this email already exists";

/// Hash verified against when the email is unknown, so both login failure
/// paths spend the same hashing effort.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| password::hash_password("not-a-real-password").ok())
        .as_deref()
}

/// Account operations over the credential store
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Registers a new user
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if the password is shorter than 6
    ///   characters or the email is empty
    /// - `ServiceError::Conflict` if the normalized email is taken
    /// - `ServiceError::Internal` on store or hashing failure
    pub async fn signup(&self, email: &str, plaintext_password: &str) -> ServiceResult<UserView> {
        password::validate_password(plaintext_password).map_err(ServiceError::Validation)?;
        let email = normalize_email(email)?;

        if self.users.find_user_by_email(&email).await?.is_some() {
            return Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = password::hash_password(plaintext_password)?;

        let user = self
            .users
            .insert_user(CreateUser {
                email,
                password_hash,
                access_token: generate_access_token(),
            })
            .await
            .map_err(|e| match e {
                // lost a race with a concurrent signup for the same email
                StoreError::Conflict(_) => ServiceError::Conflict(EMAIL_TAKEN.to_string()),
                other => other.into(),
            })?;

        info!(user_id = %user.id, "User signed up");
        Ok(UserView::from(user))
    }

    /// Verifies an email/password pair and returns the user's token
    ///
    /// # Errors
    ///
    /// - `ServiceError::Unauthorized` with [`INVALID_CREDENTIALS`] when the
    ///   user is unknown or the password is wrong (indistinguishable)
    /// - `ServiceError::Internal` on store or hashing failure
    pub async fn login(&self, email: &str, plaintext_password: &str) -> ServiceResult<UserView> {
        let rejected = || ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string());

        let email = normalize_email(email).map_err(|_| rejected())?;

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            if let Some(hash) = dummy_hash() {
                let _ = password::verify_password(plaintext_password, hash);
            }
            warn!("Login attempt for unknown email");
            return Err(rejected());
        };

        if !password::verify_password(plaintext_password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(rejected());
        }

        info!(user_id = %user.id, "User logged in");
        Ok(UserView::from(user))
    }
}
