//! Runtime settings resolved from flags and environment.

use crate::cli::Cli;
use std::path::PathBuf;
use tasknest_core::LoggingConfig;

const DB_PATH_ENV: &str = "TASKNEST_DB_PATH";
const DEFAULT_DB_FILE_NAME: &str = "tasknest.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub logging: Option<LoggingConfig>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        let env_db = std::env::var(DB_PATH_ENV).ok();
        Self {
            db_path: resolve_db_path(cli.db.clone(), env_db.as_deref()),
            logging: cli.log_dir.as_ref().map(|dir| {
                let config = LoggingConfig::new(dir);
                match &cli.log_level {
                    Some(level) => config.with_level(level),
                    None => config,
                }
            }),
        }
    }
}

/// Flag, then non-blank env value, then a file in the temp dir.
fn resolve_db_path(flag: Option<PathBuf>, env_value: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(raw) = env_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{resolve_db_path, Settings};
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::PathBuf;
    use tasknest_core::{default_log_level, LoggingConfig};

    fn settings(args: &[&str]) -> Settings {
        Settings::from_cli(&Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn flag_beats_env_and_blank_env_is_ignored() {
        assert_eq!(
            resolve_db_path(Some(PathBuf::from("/a.db")), Some("/b.db")),
            PathBuf::from("/a.db")
        );
        assert_eq!(
            resolve_db_path(None, Some(" /b.db ")),
            PathBuf::from("/b.db")
        );
        assert_eq!(
            resolve_db_path(None, Some("  ")),
            std::env::temp_dir().join("tasknest.sqlite3")
        );
    }

    #[test]
    fn logging_stays_off_without_log_dir() {
        let settings = settings(&["tasknest", "--log-level", "warn", "whoami"]);
        assert_eq!(settings.logging, None);
    }

    #[test]
    fn log_dir_enables_logging_with_level_override() {
        let defaulted = settings(&["tasknest", "--log-dir", "/var/log/tn", "whoami"]);
        let logging = defaulted.logging.unwrap();
        assert_eq!(logging.log_dir, PathBuf::from("/var/log/tn"));
        assert_eq!(logging.level, default_log_level());

        let overridden = settings(&[
            "tasknest",
            "whoami",
            "--log-dir",
            "/var/log/tn",
            "--log-level",
            "error",
        ]);
        assert_eq!(
            overridden.logging,
            Some(LoggingConfig::new("/var/log/tn").with_level("error"))
        );
    }
}
