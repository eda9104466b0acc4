//! Command-line options and resolved runtime configuration.
//!
//! # Responsibility
//! - Parse flags with `bpaf`.
//! - Resolve defaults against the platform data directory.
//!
//! # Invariants
//! - A resolved log directory is always absolute.

use bpaf::Bpaf;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "studynote";
const DB_FILE_NAME: &str = "studynote.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Terminal note-taking for students.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
pub struct CliOptions {
    /// SQLite file holding the notes
    #[bpaf(long("db"), argument("PATH"))]
    pub db: Option<PathBuf>,
    /// Directory for rolling log files
    #[bpaf(long("log-dir"), argument("DIR"))]
    pub log_dir: Option<PathBuf>,
    /// One of trace, debug, info, warn, error
    #[bpaf(long("log-level"), argument("LEVEL"))]
    pub log_level: Option<String>,
    /// Do not write log files
    #[bpaf(long("no-log"), switch)]
    pub no_log: bool,
}

/// Effective configuration after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// `None` when logging is disabled.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    /// Applies defaults rooted at `data_root`; relative paths resolve against `cwd`.
    pub fn resolve(options: CliOptions, data_root: &Path, cwd: &Path) -> Self {
        let app_dir = absolutize(&data_root.join(APP_DIR_NAME), cwd);
        let db_path = options
            .db
            .map(|path| absolutize(&path, cwd))
            .unwrap_or_else(|| app_dir.join(DB_FILE_NAME));
        let log_dir = if options.no_log {
            None
        } else {
            Some(
                options
                    .log_dir
                    .map(|path| absolutize(&path, cwd))
                    .unwrap_or_else(|| app_dir.join(LOG_DIR_NAME)),
            )
        };
        let log_level = options
            .log_level
            .unwrap_or_else(|| studynote_core::default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }

    /// Creates the parent directory of the database file.
    pub fn ensure_db_dir(&self) -> std::io::Result<()> {
        match self.db_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
