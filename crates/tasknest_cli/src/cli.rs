//! Command-line surface.
//!
//! Each subcommand stands in for one form or control of the app. The same
//! `Command` enum is parsed from process arguments and from `shell` lines.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasknest")]
#[command(author, version, long_about = None)]
#[command(about = "Accounts and per-user task lists over a local store")]
pub struct Cli {
    /// Path to the store file (falls back to TASKNEST_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level for file logging: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for log files; logging stays off without it
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// One line typed into `tasknest shell`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    App(Command),

    /// Leave the shell and drop its non-remembered session
    #[command(alias = "quit")]
    Exit,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },

    /// Log in; without --remember the session ends with this process or shell
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        remember: bool,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Request a password reset link
    Forgot {
        #[arg(long)]
        email: String,
    },

    /// Set a new password using the last requested reset link
    Reset {
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },

    /// Show or change the task list
    Tasks {
        #[command(subcommand)]
        action: Option<TaskAction>,
    },

    /// Interactive session with its own non-remembered login slot
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks (default)
    List,

    /// Append a task
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark a task done or undo it
    Toggle { index: usize },

    /// Delete a task
    Remove { index: usize },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, ShellCommand, ShellLine, TaskAction};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn parses_global_db_after_subcommand() {
        let cli = Cli::try_parse_from(["tasknest", "whoami", "--db", "/tmp/x.sqlite3"]).unwrap();
        assert!(matches!(cli.command, Command::Whoami));
        assert_eq!(cli.db.unwrap().to_str(), Some("/tmp/x.sqlite3"));
    }

    #[test]
    fn shell_line_joins_task_words() {
        let line = ShellLine::try_parse_from(["tasks", "add", "buy", "milk"]).unwrap();
        match line.command {
            ShellCommand::App(Command::Tasks {
                action: Some(TaskAction::Add { text }),
            }) => assert_eq!(text.join(" "), "buy milk"),
            other => panic!("unexpected command: {other:?}"),
        }
        let exit = ShellLine::try_parse_from(["quit"]).unwrap();
        assert!(matches!(exit.command, ShellCommand::Exit));
    }
}
