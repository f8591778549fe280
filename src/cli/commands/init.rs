use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the two CSV datasets (pending and archive), header row only
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data_dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let mut cfg = Config::load();
    if let Some(custom) = &cli.data_dir {
        cfg.data_dir = custom.clone();
    }

    println!("⚙️  Initializing proglogger…");

    // creates the CSV files with their fixed headers if absent
    let store = Store::open(&cfg.data_dir)?;
    println!("📄 Pending data : {}", store.pending_path().display());
    println!("📄 Reported data: {}", store.archive_path().display());

    Ok(())
}
