/// PostgreSQL store backend
///
/// Thin adapter from the store traits to the model queries in
/// `crate::models`. Ordering, filtering and the hearts increment are all
/// done in SQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{StoreError, ThoughtStore, UserStore};
use crate::db::pool::health_check;
use crate::models::{
    thought::{CreateThought, Thought, ThoughtFilter},
    user::{CreateUser, User},
};

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, data: CreateUser) -> Result<User, StoreError> {
        Ok(User::create(&self.pool, data).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(User::find_by_email(&self.pool, email).await?)
    }

    async fn find_user_by_access_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        Ok(User::find_by_access_token(&self.pool, token).await?)
    }
}

#[async_trait]
impl ThoughtStore for PgStore {
    async fn insert_thought(&self, data: CreateThought) -> Result<Thought, StoreError> {
        Ok(Thought::create(&self.pool, data).await?)
    }

    async fn find_thought(&self, id: Uuid) -> Result<Option<Thought>, StoreError> {
        Ok(Thought::find_by_id(&self.pool, id).await?)
    }

    async fn list_thoughts(&self, filter: ThoughtFilter) -> Result<Vec<Thought>, StoreError> {
        debug!(min_hearts = ?filter.min_hearts, "Listing thoughts");
        Ok(Thought::list(&self.pool, filter).await?)
    }

    async fn update_message(
        &self,
        id: Uuid,
        message: String,
    ) -> Result<Option<Thought>, StoreError> {
        Ok(Thought::update_message(&self.pool, id, message).await?)
    }

    async fn increment_hearts(&self, id: Uuid) -> Result<Option<Thought>, StoreError> {
        Ok(Thought::increment_hearts(&self.pool, id).await?)
    }

    async fn delete_thought(&self, id: Uuid) -> Result<Option<Thought>, StoreError> {
        Ok(Thought::delete(&self.pool, id).await?)
    }

    async fn delete_all_thoughts(&self) -> Result<u64, StoreError> {
        Ok(Thought::delete_all(&self.pool).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(health_check(&self.pool).await?)
    }
}
