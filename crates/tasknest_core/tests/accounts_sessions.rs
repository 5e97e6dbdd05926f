use tasknest_core::auth::digest::password_digest;
use tasknest_core::{
    AccountStore, AuthError, KeyValueStore, MemoryStore, SessionManager, SessionPayload,
};

fn ann() -> SessionPayload {
    SessionPayload {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
    }
}

#[test]
fn create_twice_with_case_variant_email_is_duplicate() {
    let store = MemoryStore::new();
    let accounts = AccountStore::new(&store);

    for (first, second) in [
        ("a@x.com", "a@x.com"),
        ("a@x.com", "A@X.COM"),
        ("Mixed@Case.org", " mixed@case.ORG "),
    ] {
        accounts.create("first", first, "pw123456").unwrap();
        let err = accounts.create("second", second, "other-pw").unwrap_err();
        assert!(
            matches!(err, AuthError::DuplicateUser),
            "{first} vs {second}"
        );
        store.remove("users").unwrap();
    }
}

#[test]
fn verify_succeeds_only_for_matching_digest() {
    let store = MemoryStore::new();
    let accounts = AccountStore::new(&store);
    accounts.create("Ann", "ann@x.com", "pw123456").unwrap();

    let record = accounts.verify("ANN@x.com", "pw123456").unwrap();
    assert_eq!(record.email, "ann@x.com");
    assert_eq!(record.password_digest, password_digest("pw123456"));

    let wrong_password = accounts.verify("ann@x.com", "pw1234567").unwrap_err();
    let unknown_user = accounts.verify("bob@x.com", "pw123456").unwrap_err();
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_user, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.user_message(), unknown_user.user_message());
}

#[test]
fn update_password_changes_what_verify_accepts() {
    let store = MemoryStore::new();
    let accounts = AccountStore::new(&store);
    accounts.create("Ann", "ann@x.com", "pw123456").unwrap();

    accounts
        .update_password("ann@x.com", &password_digest("new-secret"))
        .unwrap();

    assert!(accounts.verify("ann@x.com", "new-secret").is_ok());
    assert!(matches!(
        accounts.verify("ann@x.com", "pw123456"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn remembered_login_uses_persistent_slot_only() {
    let persistent = MemoryStore::new();
    let transient = MemoryStore::new();
    let sessions = SessionManager::new(&persistent, &transient);

    sessions.login(&ann(), false).unwrap();
    sessions.login(&ann(), true).unwrap();

    assert_eq!(sessions.current_user().unwrap(), Some(ann()));
    assert!(persistent.contains_key("loggedInPersistent"));
    assert!(!transient.contains_key("loggedInTransient"));
}

#[test]
fn transient_login_clears_persistent_slot() {
    let persistent = MemoryStore::new();
    let transient = MemoryStore::new();
    let sessions = SessionManager::new(&persistent, &transient);

    sessions.login(&ann(), true).unwrap();
    sessions.login(&ann(), false).unwrap();

    assert_eq!(sessions.current_user().unwrap(), Some(ann()));
    assert!(!persistent.contains_key("loggedInPersistent"));
    assert!(transient.contains_key("loggedInTransient"));
}

#[test]
fn logout_clears_either_slot() {
    for remember in [true, false] {
        let persistent = MemoryStore::new();
        let transient = MemoryStore::new();
        let sessions = SessionManager::new(&persistent, &transient);

        sessions.login(&ann(), remember).unwrap();
        sessions.logout().unwrap();

        assert!(sessions.current_user().unwrap().is_none());
        assert!(persistent.is_empty());
        assert!(transient.is_empty());
    }
}

#[test]
fn transient_session_ends_with_its_store() {
    let persistent = MemoryStore::new();
    {
        let tab = MemoryStore::new();
        SessionManager::new(&persistent, &tab)
            .login(&ann(), false)
            .unwrap();
    }

    let new_tab = MemoryStore::new();
    let sessions = SessionManager::new(&persistent, &new_tab);
    assert!(sessions.current_user().unwrap().is_none());
}
