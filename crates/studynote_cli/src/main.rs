//! StudyNote terminal entry point.
//!
//! # Responsibility
//! - Resolve configuration and bootstrap logging and storage.
//! - Hand the note controller to the terminal UI and report fatal errors.

mod config;
mod tui;

use anyhow::{anyhow, Context};
use config::{cli_options, AppConfig};
use log::{error, info};
use studynote_core::db::open_db;
use studynote_core::{init_logging, NotesStore, NotesUi, SqliteKeyValueRepository};

fn main() -> anyhow::Result<()> {
    let options = cli_options().run();
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let data_root = dirs::data_dir().unwrap_or_else(|| cwd.clone());
    let config = AppConfig::resolve(options, &data_root, &cwd);

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)
            .map_err(|message| anyhow!(message))
            .context("failed to initialize logging")?;
    }

    config.ensure_db_dir().with_context(|| {
        format!(
            "failed to create storage directory for `{}`",
            config.db_path.display()
        )
    })?;
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let repo = SqliteKeyValueRepository::try_new(&conn).context("storage is not ready")?;

    let mut ui = NotesUi::new(NotesStore::new(repo));
    ui.start();

    if let Err(err) = tui::run(&mut ui) {
        error!("event=app_exit module=cli status=error error={err}");
        return Err(err).context("terminal UI failed");
    }

    info!("event=app_exit module=cli status=ok");
    Ok(())
}
