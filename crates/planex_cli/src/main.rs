//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `planex_core` linkage and database bootstrap from a shell.
//! - Print the current dashboard view in a stable line format.

use clap::Parser;
use planex_core::db::open_db;
use planex_core::{
    core_version, init_logging, ping, CoreConfig, DashboardStore, SqliteKeyValueStore,
    ThemeService,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "planex_cli", version)]
struct Args {
    /// SQLite database path.
    #[arg(long, env = "PLANEX_DB_PATH", default_value = "planex.sqlite3")]
    db_path: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "PLANEX_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// One of trace|debug|info|warn|error. Defaults to the build profile level.
    #[arg(long, env = "PLANEX_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn into_config(self) -> CoreConfig {
        CoreConfig::new(self.db_path, self.log_dir, self.log_level)
    }
}

fn main() -> ExitCode {
    let config = Args::parse().into_config();

    println!("planex_core ping={}", ping());
    println!("planex_core version={}", core_version());

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open `{}`: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let storage = SqliteKeyValueStore::new(&conn);
    let store = DashboardStore::load(&storage);
    let theme = ThemeService::load(&storage);

    let view = store.current_view();
    println!("theme={}", theme.theme().as_str());
    println!(
        "view={} total={} completed={} percentage={}",
        view.mode.as_str(),
        view.overall.total,
        view.overall.completed,
        view.overall.percentage
    );
    for (unit, rate) in &view.per_unit {
        if rate.total > 0 {
            println!(
                "unit={} total={} completed={} percentage={}",
                unit.key(),
                rate.total,
                rate.completed,
                rate.percentage
            );
        }
    }
    for progress in store.habit_progress() {
        println!(
            "habit={} days={} percentage={}",
            progress.habit.name, progress.completed_days, progress.percentage
        );
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_build_core_config() {
        let config = Args::try_parse_from([
            "planex_cli",
            "--db-path",
            "/tmp/planex-test.db",
            "--log-dir",
            "/tmp/planex-logs",
            "--log-level",
            "warn",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.db_path, PathBuf::from("/tmp/planex-test.db"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/planex-logs")));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["planex_cli", "--verbose"]).is_err());
    }
}
