//! # Thoughts Shared Library
//!
//! Data model, storage, authentication and business logic for the thoughts
//! service. The HTTP layer lives in the `thoughts-api` crate.
//!
//! ## Module Organization
//!
//! - `models`: `User` and `Thought` with their PostgreSQL queries
//! - `store`: storage traits plus PostgreSQL and in-memory backends
//! - `db`: connection pool and migrations
//! - `auth`: password hashing, access tokens, bearer authentication
//! - `services`: signup/login and thought operations
//! - `seed`: optional demo data

pub mod auth;
pub mod db;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
