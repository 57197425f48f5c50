/// In-memory store backend
///
/// Keeps users and thoughts in hash maps behind a single tokio `RwLock`.
/// Every mutation happens while holding the write lock, which gives the
/// same atomicity the PostgreSQL backend gets from single-statement
/// updates. Listing sorts by `created_at` and then by insertion sequence,
/// so thoughts created within the same clock tick still come back
/// newest-first.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, ThoughtStore, UserStore};
use crate::models::{
    thought::{CreateThought, Thought, ThoughtFilter},
    user::{CreateUser, User},
};

#[derive(Debug, Clone)]
struct StoredThought {
    seq: u64,
    thought: Thought,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    thoughts: HashMap<Uuid, StoredThought>,
    next_seq: u64,
}

/// Store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of thoughts currently stored
    pub async fn thought_count(&self) -> usize {
        self.inner.read().await.thoughts.len()
    }

    /// Number of users currently stored
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, data: CreateUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == data.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }
        if inner
            .users
            .values()
            .any(|u| u.access_token == data.access_token)
        {
            return Err(StoreError::Conflict("users_access_token_key".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            access_token: data.access_token,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_access_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.access_token == token)
            .cloned())
    }
}

#[async_trait]
impl ThoughtStore for MemoryStore {
    async fn insert_thought(&self, data: CreateThought) -> Result<Thought, StoreError> {
        let mut inner = self.inner.write().await;

        let thought = Thought {
            id: Uuid::new_v4(),
            message: data.message,
            hearts: 0,
            created_at: Utc::now(),
        };

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.thoughts.insert(
            thought.id,
            StoredThought {
                seq,
                thought: thought.clone(),
            },
        );

        Ok(thought)
    }

    async fn find_thought(&self, id: Uuid) -> Result<Option<Thought>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.thoughts.get(&id).map(|stored| stored.thought.clone()))
    }

    async fn list_thoughts(&self, filter: ThoughtFilter) -> Result<Vec<Thought>, StoreError> {
        let inner = self.inner.read().await;

        let mut matching: Vec<&StoredThought> = inner
            .thoughts
            .values()
            .filter(|stored| filter.matches(&stored.thought))
            .collect();
        matching.sort_by(|a, b| {
            b.thought
                .created_at
                .cmp(&a.thought.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(matching
            .into_iter()
            .map(|stored| stored.thought.clone())
            .collect())
    }

    async fn update_message(
        &self,
        id: Uuid,
        message: String,
    ) -> Result<Option<Thought>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.thoughts.get_mut(&id).map(|stored| {
            stored.thought.message = message;
            stored.thought.clone()
        }))
    }

    async fn increment_hearts(&self, id: Uuid) -> Result<Option<Thought>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.thoughts.get_mut(&id) else {
            return Ok(None);
        };

        stored.thought.hearts = stored
            .thought
            .hearts
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend("hearts counter overflow".to_string()))?;

        Ok(Some(stored.thought.clone()))
    }

    async fn delete_thought(&self, id: Uuid) -> Result<Option<Thought>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.thoughts.remove(&id).map(|stored| stored.thought))
    }

    async fn delete_all_thoughts(&self) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let removed = inner.thoughts.len() as u64;
        inner.thoughts.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, token: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            access_token: token.to_string(),
        }
    }

    async fn insert(store: &MemoryStore, message: &str) -> Thought {
        store
            .insert_thought(CreateThought {
                message: message.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_user_rejects_duplicate_email() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@example.com", "t1")).await.unwrap();

        let result = store.insert_user(new_user("a@example.com", "t2")).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_user_rejects_duplicate_token() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@example.com", "t1")).await.unwrap();

        let result = store.insert_user(new_user("b@example.com", "t1")).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_find_user_by_access_token_is_exact() {
        let store = MemoryStore::new();
        let user = store.insert_user(new_user("a@example.com", "abc123")).await.unwrap();

        let found = store.find_user_by_access_token("abc123").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));

        assert!(store.find_user_by_access_token("abc12").await.unwrap().is_none());
        assert!(store.find_user_by_access_token("ABC123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        let first = insert(&store, "first thought").await;
        let second = insert(&store, "second thought").await;
        let third = insert(&store, "third thought").await;

        let listed = store.list_thoughts(ThoughtFilter::default()).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_increment_and_delete() {
        let store = MemoryStore::new();
        let thought = insert(&store, "likeable thought").await;

        let liked = store.increment_hearts(thought.id).await.unwrap().unwrap();
        assert_eq!(liked.hearts, 1);

        let deleted = store.delete_thought(thought.id).await.unwrap().unwrap();
        assert_eq!(deleted.hearts, 1);

        assert!(store.delete_thought(thought.id).await.unwrap().is_none());
        assert!(store.increment_hearts(thought.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_at_max_hearts_is_an_error() {
        let store = MemoryStore::new();
        let thought = insert(&store, "maxed out thought").await;
        store
            .inner
            .write()
            .await
            .thoughts
            .get_mut(&thought.id)
            .unwrap()
            .thought
            .hearts = i32::MAX;

        let result = store.increment_hearts(thought.id).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));

        let unchanged = store.find_thought(thought.id).await.unwrap().unwrap();
        assert_eq!(unchanged.hearts, i32::MAX);
    }

    #[tokio::test]
    async fn test_delete_all_thoughts() {
        let store = MemoryStore::new();
        insert(&store, "one thought").await;
        insert(&store, "two thoughts").await;

        assert_eq!(store.delete_all_thoughts().await.unwrap(), 2);
        assert_eq!(store.thought_count().await, 0);
    }
}
