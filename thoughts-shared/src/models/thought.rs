/// Thought model and database operations
///
/// A thought is a short message (5-140 characters after trimming) with a
/// like counter. The message is the only user-editable field; `hearts` only
/// moves through [`Thought::increment_hearts`], which is a single atomic
/// `UPDATE` so concurrent likes never lose an increment.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE thoughts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     message VARCHAR(140) NOT NULL,
///     hearts INTEGER NOT NULL DEFAULT 0 CHECK (hearts >= 0),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Thought entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    /// Unique thought ID (UUID v4)
    pub id: Uuid,

    /// Trimmed message text
    pub message: String,

    /// Number of likes, never negative
    pub hearts: i32,

    /// Creation time, immutable
    pub created_at: DateTime<Utc>,
}

/// Input for creating a thought
///
/// `message` must already be validated (see `services::validation`).
#[derive(Debug, Clone)]
pub struct CreateThought {
    pub message: String,
}

/// Query filter for listing thoughts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThoughtFilter {
    /// Only include thoughts with at least this many hearts
    pub min_hearts: Option<i32>,
}

impl ThoughtFilter {
    /// Returns true if the thought passes the filter
    pub fn matches(&self, thought: &Thought) -> bool {
        self.min_hearts
            .map_or(true, |min| thought.hearts >= min)
    }
}

impl Thought {
    /// Inserts a new thought with zero hearts
    ///
    /// # Errors
    ///
    /// Returns an error if the database rejects the row or the connection fails
    pub async fn create(pool: &PgPool, data: CreateThought) -> Result<Self, sqlx::Error> {
        let thought = sqlx::query_as::<_, Thought>(
            r#"
            INSERT INTO thoughts (message)
            VALUES ($1)
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(data.message)
        .fetch_one(pool)
        .await?;

        Ok(thought)
    }

    /// Finds a thought by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let thought = sqlx::query_as::<_, Thought>(
            r#"
            SELECT id, message, hearts, created_at
            FROM thoughts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(thought)
    }

    /// Lists thoughts matching the filter, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool, filter: ThoughtFilter) -> Result<Vec<Self>, sqlx::Error> {
        let thoughts = sqlx::query_as::<_, Thought>(
            r#"
            SELECT id, message, hearts, created_at
            FROM thoughts
            WHERE ($1::INTEGER IS NULL OR hearts >= $1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(filter.min_hearts)
        .fetch_all(pool)
        .await?;

        Ok(thoughts)
    }

    /// Replaces the message of a thought
    ///
    /// `hearts` and `created_at` are left untouched.
    ///
    /// # Returns
    ///
    /// The updated thought, or None if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update_message(
        pool: &PgPool,
        id: Uuid,
        message: String,
    ) -> Result<Option<Self>, sqlx::Error> {
        let thought = sqlx::query_as::<_, Thought>(
            r#"
            UPDATE thoughts
            SET message = $2
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id)
        .bind(message)
        .fetch_optional(pool)
        .await?;

        Ok(thought)
    }

    /// Atomically adds one heart and returns the post-increment row
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn increment_hearts(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let thought = sqlx::query_as::<_, Thought>(
            r#"
            UPDATE thoughts
            SET hearts = hearts + 1
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(thought)
    }

    /// Hard-deletes a thought and returns its last state
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let thought = sqlx::query_as::<_, Thought>(
            r#"
            DELETE FROM thoughts
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(thought)
    }

    /// Deletes every thought (used by demo seeding)
    ///
    /// # Returns
    ///
    /// Number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM thoughts").execute(pool).await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thought_with_hearts(hearts: i32) -> Thought {
        Thought {
            id: Uuid::new_v4(),
            message: "Hello there".to_string(),
            hearts,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_default_matches_everything() {
        let filter = ThoughtFilter::default();
        assert!(filter.matches(&thought_with_hearts(0)));
        assert!(filter.matches(&thought_with_hearts(42)));
    }

    #[test]
    fn test_filter_min_hearts_is_inclusive() {
        let filter = ThoughtFilter {
            min_hearts: Some(2),
        };

        assert!(!filter.matches(&thought_with_hearts(1)));
        assert!(filter.matches(&thought_with_hearts(2)));
        assert!(filter.matches(&thought_with_hearts(3)));
    }

    #[test]
    fn test_thought_serializes_camel_case() {
        let thought = thought_with_hearts(3);
        let json = serde_json::to_value(&thought).unwrap();

        assert_eq!(json["hearts"], 3);
        assert_eq!(json["message"], "Hello there");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
