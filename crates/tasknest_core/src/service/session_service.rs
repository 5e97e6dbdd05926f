//! Session manager over the persistent and transient slots.
//!
//! # Invariants
//! - After `login`, exactly one slot holds a session.
//! - The persistent slot wins when both are somehow populated.
//! - An undecodable slot is treated as logged out, not as an error.

use crate::model::user::SessionPayload;
use crate::storage::{keys, read_json, write_json, KeyValueStore, StorageError, StorageResult};
use log::{info, warn};

/// Tracks the logged-in user across a "remember me" slot and a
/// session-scoped slot.
pub struct SessionManager<P: KeyValueStore, T: KeyValueStore> {
    persistent: P,
    transient: T,
}

impl<P: KeyValueStore, T: KeyValueStore> SessionManager<P, T> {
    pub fn new(persistent: P, transient: T) -> Self {
        Self {
            persistent,
            transient,
        }
    }

    /// Stores `payload` in the slot chosen by `remember` and clears the other.
    pub fn login(&self, payload: &SessionPayload, remember: bool) -> StorageResult<()> {
        if remember {
            write_json(&self.persistent, keys::SESSION_PERSISTENT, payload)?;
            self.transient.remove(keys::SESSION_TRANSIENT)?;
        } else {
            write_json(&self.transient, keys::SESSION_TRANSIENT, payload)?;
            self.persistent.remove(keys::SESSION_PERSISTENT)?;
        }
        info!(
            "event=session_login module=session status=ok slot={}",
            slot_label(remember)
        );
        Ok(())
    }

    /// Persistent slot, else transient slot, else `None`.
    pub fn current_user(&self) -> StorageResult<Option<SessionPayload>> {
        if let Some(payload) = read_slot(&self.persistent, keys::SESSION_PERSISTENT)? {
            return Ok(Some(payload));
        }
        read_slot(&self.transient, keys::SESSION_TRANSIENT)
    }

    pub fn is_authenticated(&self) -> StorageResult<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Clears both slots unconditionally.
    pub fn logout(&self) -> StorageResult<()> {
        self.persistent.remove(keys::SESSION_PERSISTENT)?;
        self.transient.remove(keys::SESSION_TRANSIENT)?;
        info!("event=session_logout module=session status=ok");
        Ok(())
    }
}

fn read_slot<S: KeyValueStore>(store: &S, key: &str) -> StorageResult<Option<SessionPayload>> {
    match read_json(store, key) {
        Ok(payload) => Ok(payload),
        Err(StorageError::Decode { .. }) => {
            warn!(
                "event=session_read module=session status=error error_code=invalid_payload slot={key}"
            );
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn slot_label(remember: bool) -> &'static str {
    if remember {
        "persistent"
    } else {
        "transient"
    }
}

#[cfg(test)]
mod tests {
    use super::SessionManager;
    use crate::model::user::SessionPayload;
    use crate::storage::{KeyValueStore, MemoryStore};

    fn payload() -> SessionPayload {
        SessionPayload {
            name: "ann".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    #[test]
    fn persistent_slot_wins_over_transient() {
        let persistent = MemoryStore::new();
        let transient = MemoryStore::new();
        transient
            .set("loggedInTransient", r#"{"name":"tab","email":"tab@x.com"}"#)
            .unwrap();
        persistent
            .set(
                "loggedInPersistent",
                r#"{"name":"ann","email":"ann@x.com"}"#,
            )
            .unwrap();

        let sessions = SessionManager::new(&persistent, &transient);
        assert_eq!(sessions.current_user().unwrap(), Some(payload()));
    }

    #[test]
    fn corrupted_slot_reads_as_logged_out() {
        let persistent = MemoryStore::new();
        let transient = MemoryStore::new();
        persistent.set("loggedInPersistent", "not json").unwrap();

        let sessions = SessionManager::new(&persistent, &transient);
        assert!(sessions.current_user().unwrap().is_none());
        assert!(!sessions.is_authenticated().unwrap());
    }
}
