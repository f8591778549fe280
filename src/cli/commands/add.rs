use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::record::ProgressRecord;
use crate::store::Store;
use crate::utils::date;

/// Add a new progress entry to the pending dataset.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        blok,
        item,
        date: date_arg,
        percent,
        value,
    } = cmd
    {
        //
        // 1. Parse date (defaults to today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Open the store
        //
        let store = Store::open(&cfg.data_dir)?;

        //
        // 3. Execute logic
        //
        AddLogic::apply(
            &store,
            ProgressRecord {
                block: blok.clone(),
                date: d,
                item: item.clone(),
                percent: *percent,
                contract_value: *value,
            },
        )?;
    }

    Ok(())
}
