//! Core domain logic for TaskNest.
//!
//! Accounts, sessions, password resets and per-user task lists, written
//! against a key-value storage port so every rule runs the same on an
//! in-memory map or on the SQLite-backed store.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod service;
pub mod storage;

pub use auth::error::{AuthError, AuthResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::task::TaskRecord;
pub use model::user::{SessionPayload, UserRecord};
pub use navigation::{guard, Page};
pub use service::account_service::AccountStore;
pub use service::auth_service::{
    AuthService, ForgotPasswordForm, FormOutcome, LoginForm, ResetPasswordForm, SignupForm,
};
pub use service::reset_service::{PasswordResetFlow, ResetRequest};
pub use service::session_service::SessionManager;
pub use service::task_service::{
    TaskError, TaskLine, TaskListManager, TaskListView, TaskResult, EMPTY_LIST_PLACEHOLDER,
};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
