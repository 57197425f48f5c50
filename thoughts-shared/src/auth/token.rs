/// Access token generation
///
/// Access tokens are opaque capability strings: 64 bytes from the thread
/// RNG, hex-encoded (128 characters). They are assigned once at signup and
/// matched exactly by the `Authenticator`.

use rand::RngCore;

/// Number of random bytes in an access token
const TOKEN_BYTES: usize = 64;

/// Length of a hex-encoded access token
pub const ACCESS_TOKEN_LENGTH: usize = TOKEN_BYTES * 2;

/// Generates a new random access token
///
/// ```
/// use thoughts_shared::auth::token::{generate_access_token, ACCESS_TOKEN_LENGTH};
///
/// let token = generate_access_token();
/// assert_eq!(token.len(), ACCESS_TOKEN_LENGTH);
/// ```
pub fn generate_access_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
