//! Credential rules shared by the account, session and reset services.
//!
//! # Responsibility
//! - Normalize emails and validate form input.
//! - Produce the placeholder password digest.
//! - Define the user-facing auth error taxonomy.
//!
//! # Invariants
//! - Every email used as a key passes through `normalize_email` first.
//! - The digest is deterministic and reversible; it is not a security control.

pub mod digest;
pub mod error;
pub mod validation;
