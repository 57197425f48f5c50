/// Storage abstraction for users and thoughts
///
/// Services only talk to the [`UserStore`] and [`ThoughtStore`] traits.
/// Two backends implement them:
///
/// - [`postgres::PgStore`]: sqlx/PostgreSQL, used in production
/// - [`memory::MemoryStore`]: in-process maps behind a tokio `RwLock`,
///   used by tests and database-less local runs
///
/// Every mutation targets exactly one entity, and each backend applies it
/// as a single atomic step, so the store is the only serialization point
/// for concurrent writes.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use thoughts_shared::models::thought::CreateThought;
/// use thoughts_shared::store::{memory::MemoryStore, ThoughtStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(MemoryStore::new());
/// let thought = store
///     .insert_thought(CreateThought { message: "Hello world".to_string() })
///     .await?;
///
/// let liked = store.increment_hearts(thought.id).await?.unwrap();
/// assert_eq!(liked.hearts, 1);
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    thought::{CreateThought, Thought, ThoughtFilter},
    user::{CreateUser, User},
};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (e.g. duplicate email)
    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    /// The backend failed (connection lost, query error, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(constraint) = db_err.constraint() {
                if db_err.is_unique_violation() {
                    return StoreError::Conflict(constraint.to_string());
                }
            }
        }

        StoreError::Backend(err.to_string())
    }
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user
    ///
    /// Returns `StoreError::Conflict` if the email or token is taken.
    async fn insert_user(&self, data: CreateUser) -> Result<User, StoreError>;

    /// Looks up a user by normalized email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Looks up the user whose access token equals `token` exactly
    async fn find_user_by_access_token(&self, token: &str) -> Result<Option<User>, StoreError>;
}

/// Thought store
#[async_trait]
pub trait ThoughtStore: Send + Sync {
    /// Persists a new thought with zero hearts and the current time
    async fn insert_thought(&self, data: CreateThought) -> Result<Thought, StoreError>;

    async fn find_thought(&self, id: Uuid) -> Result<Option<Thought>, StoreError>;

    /// Lists matching thoughts ordered by `created_at`, newest first
    async fn list_thoughts(&self, filter: ThoughtFilter) -> Result<Vec<Thought>, StoreError>;

    async fn update_message(&self, id: Uuid, message: String)
        -> Result<Option<Thought>, StoreError>;

    /// Adds exactly one heart as an atomic read-modify-write
    async fn increment_hearts(&self, id: Uuid) -> Result<Option<Thought>, StoreError>;

    /// Hard-deletes a thought, returning its last state
    async fn delete_thought(&self, id: Uuid) -> Result<Option<Thought>, StoreError>;

    async fn delete_all_thoughts(&self) -> Result<u64, StoreError>;

    /// Verifies the backend is reachable
    async fn health_check(&self) -> Result<(), StoreError>;
}
