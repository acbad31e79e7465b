//! URL signing
//!
//! The signature is computed over the encoded path only:
//! ```text
//! signature = base64url(HMAC-SHA1(secret, path))
//! ```
//! using the URL-safe alphabet (`-` and `_` in place of `+` and `/`) with the
//! trailing `=` padding left in place.

use base64::{engine::general_purpose::URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Sign a path
///
/// Returns `None` when no secret is configured.
pub fn sign(path: &str, secret: Option<&str>) -> Option<String> {
    let secret = secret?;
    Some(URL_SAFE.encode(compute_hmac(secret.as_bytes(), path.as_bytes())))
}

/// Check a signature against the one `sign` would produce
///
/// Never verifies when no secret is configured.
pub fn verify(signature: &str, path: &str, secret: Option<&str>) -> bool {
    match sign(path, secret) {
        Some(expected) => constant_time_compare(signature, &expected),
        None => false,
    }
}

fn compute_hmac(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
