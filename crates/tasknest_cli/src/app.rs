//! Command dispatch over the core services.
//!
//! Plays the role of the page scripts: applies the page guard, submits the
//! named fields and turns the outcome into printable text.

use crate::cli::{Command, TaskAction};
use eyre::{bail, Result};
use log::info;
use tasknest_core::{
    AuthService, ForgotPasswordForm, KeyValueStore, LoginForm, Page, ResetPasswordForm, SignupForm,
    TaskListManager,
};

pub struct App<'a, P: KeyValueStore, T: KeyValueStore> {
    persistent: &'a P,
    auth: AuthService<&'a P, &'a T>,
}

impl<'a, P: KeyValueStore, T: KeyValueStore> App<'a, P, T> {
    pub fn new(persistent: &'a P, transient: &'a T) -> Self {
        Self {
            persistent,
            auth: AuthService::new(persistent, transient),
        }
    }

    /// Runs one command and returns the text to show.
    pub fn execute(&self, command: Command) -> Result<String> {
        info!(
            "event=cli_command module=cli status=start command={}",
            command_name(&command)
        );
        match command {
            Command::Signup {
                name,
                email,
                password,
                confirm,
            } => self.on_page(Page::Signup, || {
                let outcome = self.auth.signup(&SignupForm {
                    name,
                    email,
                    password,
                    confirm_password: confirm,
                })?;
                Ok(format_outcome(&outcome.message, outcome.redirect))
            }),
            Command::Login {
                email,
                password,
                remember,
            } => self.on_page(Page::Login, || {
                let (_, outcome) = self.auth.login(&LoginForm {
                    email,
                    password,
                    remember,
                })?;
                Ok(format_outcome(&outcome.message, outcome.redirect))
            }),
            Command::Forgot { email } => self.on_page(Page::ForgotPassword, || {
                let (_, outcome) = self.auth.forgot_password(&ForgotPasswordForm { email })?;
                Ok(format_outcome(&outcome.message, outcome.redirect))
            }),
            Command::Reset { password, confirm } => self.on_page(Page::ResetPassword, || {
                let outcome = self.auth.reset_password(&ResetPasswordForm {
                    new_password: password,
                    confirm_password: confirm,
                })?;
                Ok(format_outcome(&outcome.message, outcome.redirect))
            }),
            Command::Logout => {
                let outcome = self.auth.logout()?;
                Ok(format_outcome(&outcome.message, outcome.redirect))
            }
            Command::Whoami => Ok(match self.auth.current_user()? {
                Some(user) => format!("Logged in as {} <{}>", user.display_name(), user.email),
                None => "Not logged in.".to_string(),
            }),
            Command::Tasks { action } => {
                let action = action.unwrap_or(TaskAction::List);
                self.on_page(Page::Dashboard, || self.tasks(action))
            }
            Command::Shell => bail!("already inside a shell session"),
        }
    }

    fn tasks(&self, action: TaskAction) -> Result<String> {
        let Some(user) = self.auth.current_user()? else {
            return Ok(redirect_notice(Page::Login));
        };
        let mut list = TaskListManager::load(self.persistent, user)?;
        match action {
            TaskAction::List => {}
            TaskAction::Add { text } => {
                list.add(&text.join(" "))?;
            }
            TaskAction::Toggle { index } => {
                list.toggle(index)?;
            }
            TaskAction::Remove { index } => {
                list.remove(index)?;
            }
        }
        Ok(list.render().to_string().trim_end().to_string())
    }

    fn on_page(&self, page: Page, submit: impl FnOnce() -> Result<String>) -> Result<String> {
        match self.auth.guard(page)? {
            Some(target) => Ok(redirect_notice(target)),
            None => submit(),
        }
    }
}

fn format_outcome(message: &str, redirect: Page) -> String {
    format!("{message}\n-> {}", redirect.as_str())
}

fn redirect_notice(target: Page) -> String {
    match target {
        Page::Dashboard => "Already logged in.\n-> dashboard".to_string(),
        other => format!("Please log in first.\n-> {}", other.as_str()),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Signup { .. } => "signup",
        Command::Login { .. } => "login",
        Command::Logout => "logout",
        Command::Whoami => "whoami",
        Command::Forgot { .. } => "forgot",
        Command::Reset { .. } => "reset",
        Command::Tasks { .. } => "tasks",
        Command::Shell => "shell",
    }
}
