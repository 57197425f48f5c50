/// Authentication primitives
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and length validation
/// - [`token`]: random access token generation
/// - [`authenticator`]: bearer token lookup producing a `Principal`
///
/// Signup and login, which combine these pieces with the credential store,
/// live in `crate::services::accounts`.

pub mod authenticator;
pub mod password;
pub mod token;
