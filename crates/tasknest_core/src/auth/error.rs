//! Auth error taxonomy.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Failure reported to the form that initiated an auth action.
///
/// Every variant except `Storage` is a validation or lookup outcome; none of
/// them leave stored state half-written.
#[derive(Debug)]
pub enum AuthError {
    /// A required form field was empty.
    MissingFields,
    /// Email does not look like `local@domain`.
    InvalidEmail,
    /// An account with the normalized email already exists.
    DuplicateUser,
    /// Unknown email or wrong password; deliberately indistinguishable.
    InvalidCredentials,
    /// New password shorter than `validation::MIN_PASSWORD_CHARS`.
    WeakPassword,
    /// Password confirmation differs.
    Mismatch,
    /// No reset token is currently tracked.
    NoActiveToken,
    /// The tracked token maps to no email.
    InvalidToken,
    /// The email has no account.
    UserNotFound,
    Storage(StorageError),
}

impl AuthError {
    /// Stable message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill all fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::DuplicateUser => "This email already exists. Please log in instead.",
            Self::InvalidCredentials => "Invalid email or password.",
            Self::WeakPassword => "Password must be at least 6 characters.",
            Self::Mismatch => "Passwords do not match.",
            Self::NoActiveToken => "Reset token not found. Use Forgot Password first.",
            Self::InvalidToken => "Invalid or expired token.",
            Self::UserNotFound => "User not found.",
            Self::Storage(_) => "Something went wrong. Please try again.",
        }
    }

    /// Stable snake_case code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
            Self::DuplicateUser => "duplicate_user",
            Self::InvalidCredentials => "invalid_credentials",
            Self::WeakPassword => "weak_password",
            Self::Mismatch => "mismatch",
            Self::NoActiveToken => "no_active_token",
            Self::InvalidToken => "invalid_token",
            Self::UserNotFound => "user_not_found",
            Self::Storage(_) => "storage",
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "storage failure: {err}"),
            other => f.write_str(other.user_message()),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
