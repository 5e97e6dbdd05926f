//! Use-case services over the key-value storage port.
//!
//! # Responsibility
//! - Implement account, session, password-reset and task-list rules.
//! - Keep the CLI shell free of storage layout and validation details.
//!
//! # Invariants
//! - Services only touch storage through `KeyValueStore`.
//! - A failed operation leaves every key as it was before the call.

pub mod account_service;
pub mod auth_service;
pub mod reset_service;
pub mod session_service;
pub mod task_service;
