//! Account store.
//!
//! # Responsibility
//! - Create, look up and verify accounts in the `users` map.
//! - Replace a password digest for the reset flow.
//!
//! # Invariants
//! - Keys of the `users` map are normalized emails.
//! - Accounts are never deleted.

use crate::auth::digest::{digest_matches, password_digest};
use crate::auth::error::{AuthError, AuthResult};
use crate::auth::validation::normalize_email;
use crate::model::user::UserRecord;
use crate::storage::{keys, read_json, write_json, KeyValueStore, StorageResult};
use log::{info, warn};
use std::collections::BTreeMap;

type UserMap = BTreeMap<String, UserRecord>;

/// Email-keyed account store.
pub struct AccountStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// # Errors
    /// - `DuplicateUser` when the normalized email is taken.
    pub fn create(&self, name: &str, email: &str, password: &str) -> AuthResult<UserRecord> {
        let email = normalize_email(email);
        let mut users = self.load_users()?;
        if users.contains_key(&email) {
            warn!("event=account_create module=account status=error error_code=duplicate_user");
            return Err(AuthError::DuplicateUser);
        }

        let record = UserRecord {
            name: name.to_string(),
            email: email.clone(),
            password_digest: password_digest(password),
        };
        users.insert(email, record.clone());
        self.save_users(&users)?;

        info!(
            "event=account_create module=account status=ok user_count={}",
            users.len()
        );
        Ok(record)
    }

    /// Returns the account when `password` matches its digest.
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials`.
    pub fn verify(&self, email: &str, password: &str) -> AuthResult<UserRecord> {
        match self.find(email)? {
            Some(record) if digest_matches(&record.password_digest, password) => Ok(record),
            _ => {
                warn!(
                    "event=account_verify module=account status=error error_code=invalid_credentials"
                );
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub fn find(&self, email: &str) -> AuthResult<Option<UserRecord>> {
        let email = normalize_email(email);
        Ok(self.load_users()?.remove(&email))
    }

    pub fn exists(&self, email: &str) -> AuthResult<bool> {
        Ok(self.find(email)?.is_some())
    }

    /// Replaces the stored digest of an existing account.
    ///
    /// # Errors
    /// - `UserNotFound` when no account has this email.
    pub fn update_password(&self, email: &str, new_digest: &str) -> AuthResult<()> {
        let email = normalize_email(email);
        let mut users = self.load_users()?;
        let Some(record) = users.get_mut(&email) else {
            warn!(
                "event=account_update_password module=account status=error error_code=user_not_found"
            );
            return Err(AuthError::UserNotFound);
        };
        record.password_digest = new_digest.to_string();
        self.save_users(&users)?;

        info!("event=account_update_password module=account status=ok");
        Ok(())
    }

    fn load_users(&self) -> StorageResult<UserMap> {
        Ok(read_json(&self.store, keys::USERS)?.unwrap_or_default())
    }

    fn save_users(&self, users: &UserMap) -> StorageResult<()> {
        write_json(&self.store, keys::USERS, users)
    }
}
