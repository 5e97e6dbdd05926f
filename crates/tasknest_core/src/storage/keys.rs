//! Persisted key layout.

/// JSON object of email -> user record.
pub const USERS: &str = "users";
/// Session slot that survives restarts ("remember me").
pub const SESSION_PERSISTENT: &str = "loggedInPersistent";
/// Session slot scoped to one shell session.
pub const SESSION_TRANSIENT: &str = "loggedInTransient";
/// Pointer to the single tracked reset token.
pub const LAST_RESET_TOKEN: &str = "lastResetToken";

const RESET_TOKEN_PREFIX: &str = "resetToken:";
const TASKS_PREFIX: &str = "tasks:";

/// Key holding the email a reset token was minted for.
pub fn reset_token(token: &str) -> String {
    format!("{RESET_TOKEN_PREFIX}{token}")
}

/// Key holding the task list of a (normalized) email.
pub fn tasks(email: &str) -> String {
    format!("{TASKS_PREFIX}{email}")
}
