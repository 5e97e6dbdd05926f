//! Page model and access guards.
//!
//! # Invariants
//! - The task page is reachable only with an active session.
//! - Auth pages bounce an active session to the task page.
//! - The login page doubles as the public landing page.

/// Pages of the app as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    Dashboard,
}

impl Page {
    /// Landing page shown after logout.
    pub const LANDING: Page = Page::Login;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot_password",
            Self::ResetPassword => "reset_password",
            Self::Dashboard => "dashboard",
        }
    }

    pub fn is_auth_page(self) -> bool {
        !matches!(self, Self::Dashboard)
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Redirect target when `page` must not be shown, or `None` to stay.
pub fn guard(page: Page, authenticated: bool) -> Option<Page> {
    if page.requires_session() && !authenticated {
        return Some(Page::Login);
    }
    if page.is_auth_page() && authenticated {
        return Some(Page::Dashboard);
    }
    None
}
