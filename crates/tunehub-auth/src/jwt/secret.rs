//! Signing secret generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Number of random bytes in a generated secret.
const SECRET_BYTES: usize = 32;

/// Generates a random signing secret, base64url-encoded.
pub fn generate_secret() -> String {
    let bytes: [u8; SECRET_BYTES] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}
