//! Form input normalization and password rules.

use super::error::{AuthError, AuthResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"));

/// Canonical key form of an email: trimmed and lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Rejects emails without exactly one `@` separating non-blank parts.
pub fn validate_email(normalized: &str) -> AuthResult<()> {
    if EMAIL_RE.is_match(normalized) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

/// Fails with `MissingFields` when any value is empty.
pub fn require_filled(values: &[&str]) -> AuthResult<()> {
    if values.iter().any(|value| value.is_empty()) {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

/// Checks a new password and its confirmation.
///
/// Strength is checked before equality, so a short mismatching pair reports
/// `WeakPassword`.
pub fn validate_new_password(password: &str, confirm: &str) -> AuthResult<()> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::WeakPassword);
    }
    if password != confirm {
        return Err(AuthError::Mismatch);
    }
    Ok(())
}
