//! Password-reset flow.
//!
//! # Responsibility
//! - Mint single-use reset tokens for existing accounts.
//! - Consume the tracked token to replace a password digest.
//!
//! # Invariants
//! - At most one token is tracked under `lastResetToken`.
//! - Minting a new token deletes the mapping of the previous one.
//! - Unknown emails never produce a token mapping.
//! - A successful reset deletes both the mapping and the pointer.

use crate::auth::digest::password_digest;
use crate::auth::error::{AuthError, AuthResult};
use crate::auth::validation::{normalize_email, validate_new_password};
use crate::service::account_service::AccountStore;
use crate::storage::{keys, KeyValueStore, StorageResult};
use log::{info, warn};
use uuid::Uuid;

/// Caller-side result of a forgot-password request.
///
/// The user-facing outcome is identical whether or not a token was minted;
/// `token` is only for the local shell and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub token: Option<String>,
}

pub struct PasswordResetFlow<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PasswordResetFlow<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Mints and tracks a token when `email` has an account.
    pub fn request_reset(&self, email: &str) -> AuthResult<ResetRequest> {
        let email = normalize_email(email);
        if !AccountStore::new(&self.store).exists(&email)? {
            info!("event=reset_request module=reset status=ok minted=false");
            return Ok(ResetRequest { token: None });
        }

        if let Some(previous) = self.active_token()? {
            self.store.remove(&keys::reset_token(&previous))?;
        }

        let token = mint_token();
        self.store.set(&keys::reset_token(&token), &email)?;
        self.store.set(keys::LAST_RESET_TOKEN, &token)?;

        info!("event=reset_request module=reset status=ok minted=true");
        Ok(ResetRequest { token: Some(token) })
    }

    /// Applies `new_password` to the account behind the tracked token.
    ///
    /// # Errors
    /// - `WeakPassword` / `Mismatch` from input validation, checked first.
    /// - `NoActiveToken` when nothing is tracked.
    /// - `InvalidToken` when the tracked token maps to no email.
    /// - `UserNotFound` when the mapped email has no account.
    pub fn reset_password(&self, new_password: &str, confirm: &str) -> AuthResult<()> {
        validate_new_password(new_password, confirm)?;

        let Some(token) = self.active_token()? else {
            warn!("event=reset_apply module=reset status=error error_code=no_active_token");
            return Err(AuthError::NoActiveToken);
        };
        let mapping_key = keys::reset_token(&token);
        let Some(email) = self.store.get(&mapping_key)? else {
            warn!("event=reset_apply module=reset status=error error_code=invalid_token");
            return Err(AuthError::InvalidToken);
        };

        AccountStore::new(&self.store).update_password(&email, &password_digest(new_password))?;

        self.store.remove(&mapping_key)?;
        self.store.remove(keys::LAST_RESET_TOKEN)?;
        info!("event=reset_apply module=reset status=ok");
        Ok(())
    }

    /// Currently tracked token, if any.
    pub fn active_token(&self) -> StorageResult<Option<String>> {
        self.store.get(keys::LAST_RESET_TOKEN)
    }
}

/// 16 random bytes as 32 lowercase hex characters.
fn mint_token() -> String {
    Uuid::new_v4().simple().to_string()
}
