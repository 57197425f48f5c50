/// Thought lifecycle and queries
///
/// | Operation   | Principal | Errors                                   |
/// |-------------|-----------|------------------------------------------|
/// | `list`      | no        | Internal                                 |
/// | `get_by_id` | no        | InvalidId, NotFound                      |
/// | `create`    | yes       | Validation                               |
/// | `update`    | yes       | InvalidId, Validation, NotFound          |
/// | `delete`    | yes       | InvalidId, NotFound                      |
/// | `like`      | no        | InvalidId, NotFound                      |
///
/// Write operations take the authenticated [`Principal`] as an argument, so
/// they cannot be reached without one. Ids and messages are validated before
/// the store is touched. Likes are open to anyone.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::{ServiceError, ServiceResult};
use super::validation::{parse_thought_id, validate_message};
use crate::auth::authenticator::Principal;
use crate::models::thought::{CreateThought, Thought, ThoughtFilter};
use crate::store::ThoughtStore;

/// Operations on the thought collection
#[derive(Clone)]
pub struct ThoughtService {
    store: Arc<dyn ThoughtStore>,
}

impl ThoughtService {
    pub fn new(store: Arc<dyn ThoughtStore>) -> Self {
        Self { store }
    }

    /// Returns the backing store (used for health checks)
    pub fn store(&self) -> &Arc<dyn ThoughtStore> {
        &self.store
    }

    /// Lists thoughts, newest first, optionally with at least `min_hearts`
    ///
    /// An empty vector is a valid outcome; callers decide how to report it.
    pub async fn list(&self, min_hearts: Option<i32>) -> ServiceResult<Vec<Thought>> {
        let thoughts = self
            .store
            .list_thoughts(ThoughtFilter { min_hearts })
            .await?;

        debug!(count = thoughts.len(), min_hearts = ?min_hearts, "Listed thoughts");
        Ok(thoughts)
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Thought> {
        let id = parse_thought_id(id)?;

        self.store
            .find_thought(id)
            .await?
            .ok_or_else(ServiceError::thought_not_found)
    }

    /// Creates a thought with zero hearts
    pub async fn create(&self, principal: &Principal, message: &str) -> ServiceResult<Thought> {
        let message = validate_message(message)?;

        let thought = self.store.insert_thought(CreateThought { message }).await?;

        info!(thought_id = %thought.id, user_id = %principal.user_id, "Thought created");
        Ok(thought)
    }

    /// Replaces the message; hearts and creation time are kept
    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        message: &str,
    ) -> ServiceResult<Thought> {
        let id = parse_thought_id(id)?;
        let message = validate_message(message)?;

        let thought = self
            .store
            .update_message(id, message)
            .await?
            .ok_or_else(ServiceError::thought_not_found)?;

        info!(thought_id = %thought.id, user_id = %principal.user_id, "Thought updated");
        Ok(thought)
    }

    /// Hard-deletes a thought and returns its last state
    pub async fn delete(&self, principal: &Principal, id: &str) -> ServiceResult<Thought> {
        let id = parse_thought_id(id)?;

        let thought = self
            .store
            .delete_thought(id)
            .await?
            .ok_or_else(ServiceError::thought_not_found)?;

        info!(thought_id = %thought.id, user_id = %principal.user_id, "Thought deleted");
        Ok(thought)
    }

    /// Adds one heart atomically and returns the updated thought
    pub async fn like(&self, id: &str) -> ServiceResult<Thought> {
        let id = parse_thought_id(id)?;

        let thought = self
            .store
            .increment_hearts(id)
            .await?
            .ok_or_else(ServiceError::thought_not_found)?;

        debug!(thought_id = %thought.id, hearts = thought.hearts, "Thought liked");
        Ok(thought)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use uuid::Uuid;

    /// Store that fails the test if it is ever reached
    struct UnreachableStore;

    #[async_trait]
    impl ThoughtStore for UnreachableStore {
        async fn insert_thought(&self, _data: CreateThought) -> Result<Thought, StoreError> {
            panic!("store must not be reached")
        }

        async fn find_thought(&self, _id: Uuid) -> Result<Option<Thought>, StoreError> {
            panic!("store must not be reached")
        }

        async fn list_thoughts(&self, _filter: ThoughtFilter) -> Result<Vec<Thought>, StoreError> {
            panic!("store must not be reached")
        }

        async fn update_message(
            &self,
            _id: Uuid,
            _message: String,
        ) -> Result<Option<Thought>, StoreError> {
            panic!("store must not be reached")
        }

        async fn increment_hearts(&self, _id: Uuid) -> Result<Option<Thought>, StoreError> {
            panic!("store must not be reached")
        }

        async fn delete_thought(&self, _id: Uuid) -> Result<Option<Thought>, StoreError> {
            panic!("store must not be reached")
        }

        async fn delete_all_thoughts(&self) -> Result<u64, StoreError> {
            panic!("store must not be reached")
        }

        async fn health_check(&self) -> Result<(), StoreError> {
            panic!("store must not be reached")
        }
    }

    fn principal() -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_ids_are_rejected_before_store_access() {
        let service = ThoughtService::new(Arc::new(UnreachableStore));
        let principal = principal();

        assert_eq!(service.get_by_id("nope").await, Err(ServiceError::InvalidId));
        assert_eq!(service.like("nope").await, Err(ServiceError::InvalidId));
        assert_eq!(service.delete(&principal, "nope").await, Err(ServiceError::InvalidId));
        assert_eq!(
            service.update(&principal, "nope", "a valid message").await,
            Err(ServiceError::InvalidId)
        );
    }

    #[tokio::test]
    async fn test_invalid_messages_are_rejected_before_store_access() {
        let service = ThoughtService::new(Arc::new(UnreachableStore));
        let principal = principal();
        let id = Uuid::new_v4().to_string();

        assert!(matches!(
            service.create(&principal, "hey").await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            service.update(&principal, &id, &"x".repeat(141)).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_checks_id_before_message() {
        let service = ThoughtService::new(Arc::new(UnreachableStore));

        let result = service.update(&principal(), "bad-id", "").await;
        assert_eq!(result, Err(ServiceError::InvalidId));
    }
}
