/// User model and database operations
///
/// Users are created at signup and never modified afterwards. The access
/// token assigned at creation is the only credential used to authenticate
/// write requests.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL,
///     access_token TEXT NOT NULL UNIQUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use thoughts_shared::models::user::{CreateUser, User};
/// use thoughts_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///         access_token: "4f0c...".to_string(),
///     },
/// )
/// .await?;
///
/// let found = User::find_by_access_token(&pool, &user.access_token).await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User account
///
/// The password hash is never serialized; use [`UserView`] for responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Email address, stored lower-cased
    pub email: String,

    /// Argon2id password hash (PHC string)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Opaque bearer token, unique across users
    pub access_token: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// The email must already be normalized and the password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Normalized email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password!)
    pub password_hash: String,

    /// Freshly generated access token
    pub access_token: String,
}

/// Public view of a user returned by signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub email: String,
    pub id: Uuid,
    pub access_token: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            id: user.id,
            access_token: user.access_token,
        }
    }
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email or access token already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, access_token)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, access_token, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.access_token)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by (normalized) email address
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, access_token, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds the user owning an access token (exact match)
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_access_token(
        pool: &PgPool,
        access_token: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, access_token, created_at
            FROM users
            WHERE access_token = $1
            "#,
        )
        .bind(access_token)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
