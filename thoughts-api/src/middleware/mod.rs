/// Request middleware and extractors
///
/// - `auth`: bearer token extractor for protected routes

pub mod auth;
