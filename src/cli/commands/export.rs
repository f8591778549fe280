use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ensure_writable, export_xlsx};
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = Store::open(&cfg.data_dir)?;
        let archive = store.load_archive()?;

        // empty archive: informational message, no file written
        if archive.is_empty() {
            info("No reported entries yet. Nothing to export.");
            return Ok(());
        }

        let file = file.clone().unwrap_or_else(|| cfg.export_file.clone());
        let path = Path::new(&file);

        ensure_writable(path, *force)?;
        export_xlsx(&archive, path, date::today())?;
    }
    Ok(())
}
