//! Persisted domain records.
//!
//! # Responsibility
//! - Define the JSON shapes stored behind the key layout in `storage::keys`.
//!
//! # Invariants
//! - Every stored email is already normalized (trimmed, lowercase).
//! - Field names serialize in camelCase to keep the stored layout stable.

pub mod task;
pub mod user;
