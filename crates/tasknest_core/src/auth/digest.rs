//! Placeholder password digest.
//!
//! Stored digests are `base64(reverse(password) + "::itt")`. This only keeps
//! raw text out of storage and must not be mistaken for hashing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const DIGEST_SUFFIX: &str = "::itt";

/// Deterministic digest of `password`.
pub fn password_digest(password: &str) -> String {
    let mut reversed = password.chars().rev().collect::<String>();
    reversed.push_str(DIGEST_SUFFIX);
    STANDARD.encode(reversed.as_bytes())
}

/// Returns whether `digest` was produced from `password`.
pub fn digest_matches(digest: &str, password: &str) -> bool {
    digest == password_digest(password)
}
