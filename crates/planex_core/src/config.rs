//! Resolved runtime settings shared by hosts and the CLI.
//!
//! # Responsibility
//! - Carry the database path and logging settings into core bootstrap.
//!
//! # Invariants
//! - A blank log level falls back to `default_log_level`.
//! - Logging stays disabled unless a log directory is configured.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// SQLite file used when the host does not name one.
pub const DEFAULT_DB_FILE_NAME: &str = "planex.sqlite3";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_dir: None,
            log_level: default_log_level().to_string(),
        }
    }
}

impl CoreConfig {
    /// Builds settings from host-parsed values.
    ///
    /// `log_level` of `None` or only whitespace selects the build default.
    pub fn new(db_path: PathBuf, log_dir: Option<PathBuf>, log_level: Option<String>) -> Self {
        let log_level = log_level
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DEFAULT_DB_FILE_NAME};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn default_disables_logging() {
        let config = CoreConfig::default();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert!(config.log_dir.is_none());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn blank_level_falls_back_and_explicit_level_is_trimmed() {
        let blank = CoreConfig::new(PathBuf::from("/tmp/planex.db"), None, Some("   ".into()));
        assert_eq!(blank.log_level, default_log_level());

        let explicit = CoreConfig::new(
            PathBuf::from("/tmp/planex.db"),
            Some(PathBuf::from("/var/log/planex")),
            Some(" warn ".into()),
        );
        assert_eq!(explicit.log_level, "warn");
        assert_eq!(explicit.log_dir, Some(PathBuf::from("/var/log/planex")));
    }
}
