/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `index`: Welcome document and 404 fallback
/// - `health`: Health check endpoint
/// - `users`: Signup and login
/// - `thoughts`: Thought CRUD, like and list

pub mod health;
pub mod index;
pub mod thoughts;
pub mod users;
