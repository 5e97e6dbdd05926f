//! Form-level auth use-cases.
//!
//! # Responsibility
//! - Validate the named fields of the signup, login, forgot-password and
//!   reset-password forms.
//! - Drive the account store, session manager and reset flow.
//! - Return the user-facing message and the page to redirect to.
//!
//! # Invariants
//! - Validation failures never touch storage.
//! - The forgot-password outcome is identical for known and unknown emails.

use crate::auth::error::{AuthError, AuthResult};
use crate::auth::validation::{
    normalize_email, require_filled, validate_email, validate_new_password,
};
use crate::model::user::SessionPayload;
use crate::navigation::{self, Page};
use crate::service::account_service::AccountStore;
use crate::service::reset_service::{PasswordResetFlow, ResetRequest};
use crate::service::session_service::SessionManager;
use crate::storage::{KeyValueStore, StorageResult};

/// Message shown for every forgot-password submission.
pub const RESET_REQUESTED_MESSAGE: &str =
    "If the email exists, a reset link has been created (demo mode).";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

/// Successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: String,
    pub redirect: Page,
}

impl FormOutcome {
    fn new(message: impl Into<String>, redirect: Page) -> Self {
        Self {
            message: message.into(),
            redirect,
        }
    }
}

/// Auth facade over a persistent store and a session-scoped store.
///
/// Accounts, reset tokens and the remembered session live in `persistent`;
/// only the non-remembered session lives in `transient`.
pub struct AuthService<P: KeyValueStore, T: KeyValueStore> {
    persistent: P,
    transient: T,
}

impl<P: KeyValueStore, T: KeyValueStore> AuthService<P, T> {
    pub fn new(persistent: P, transient: T) -> Self {
        Self {
            persistent,
            transient,
        }
    }

    pub fn accounts(&self) -> AccountStore<&P> {
        AccountStore::new(&self.persistent)
    }

    pub fn sessions(&self) -> SessionManager<&P, &T> {
        SessionManager::new(&self.persistent, &self.transient)
    }

    pub fn reset_flow(&self) -> PasswordResetFlow<&P> {
        PasswordResetFlow::new(&self.persistent)
    }

    /// Creates an account; redirects to login.
    pub fn signup(&self, form: &SignupForm) -> AuthResult<FormOutcome> {
        let name = form.name.trim();
        let email = normalize_email(&form.email);
        require_filled(&[
            name,
            email.as_str(),
            form.password.as_str(),
            form.confirm_password.as_str(),
        ])?;
        validate_email(&email)?;
        validate_new_password(&form.password, &form.confirm_password)?;

        self.accounts().create(name, &email, &form.password)?;
        Ok(FormOutcome::new(
            "Signup successful! Redirecting to login...",
            Page::Login,
        ))
    }

    /// Verifies credentials and opens a session; redirects to the task page.
    ///
    /// Blank fields fail like wrong credentials, without reading storage.
    pub fn login(&self, form: &LoginForm) -> AuthResult<(SessionPayload, FormOutcome)> {
        let email = normalize_email(&form.email);
        if email.is_empty() || form.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let record = self.accounts().verify(&email, &form.password)?;
        let payload = record.session_payload();
        self.sessions().login(&payload, form.remember)?;

        let outcome = FormOutcome::new(format!("Welcome, {}!", record.name), Page::Dashboard);
        Ok((payload, outcome))
    }

    /// Requests a reset token; redirects to the reset page.
    pub fn forgot_password(
        &self,
        form: &ForgotPasswordForm,
    ) -> AuthResult<(ResetRequest, FormOutcome)> {
        let email = normalize_email(&form.email);
        require_filled(&[email.as_str()])?;

        let request = self.reset_flow().request_reset(&email)?;
        Ok((
            request,
            FormOutcome::new(RESET_REQUESTED_MESSAGE, Page::ResetPassword),
        ))
    }

    /// Consumes the tracked reset token; redirects to login.
    pub fn reset_password(&self, form: &ResetPasswordForm) -> AuthResult<FormOutcome> {
        self.reset_flow()
            .reset_password(&form.new_password, &form.confirm_password)?;
        Ok(FormOutcome::new(
            "Password reset successful. Please log in.",
            Page::Login,
        ))
    }

    /// Clears every session slot; redirects to the landing page.
    pub fn logout(&self) -> AuthResult<FormOutcome> {
        self.sessions().logout()?;
        Ok(FormOutcome::new("You have been logged out.", Page::LANDING))
    }

    pub fn current_user(&self) -> StorageResult<Option<SessionPayload>> {
        self.sessions().current_user()
    }

    /// Redirect for viewing `page` with the current session state.
    pub fn guard(&self, page: Page) -> StorageResult<Option<Page>> {
        Ok(navigation::guard(page, self.sessions().is_authenticated()?))
    }
}
