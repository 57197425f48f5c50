/// Database models for the thoughts service
///
/// # Models
///
/// - `user`: User accounts and their access tokens
/// - `thought`: Thoughts with their like counter
///
/// Each model carries its own PostgreSQL queries; the store layer
/// (`crate::store`) decides which backend answers a request.

pub mod thought;
pub mod user;
