use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;

/// Promote a pending entry to the reported archive.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { no } = cmd {
        let store = Store::open(&cfg.data_dir)?;

        let archived = ReportLogic::promote(&store, *no, date::today())?;

        success(format!(
            "Entry #{} ({} | {}) marked as reported on {}",
            no,
            archived.block,
            archived.item,
            archived.report_date_str(),
        ));
    }

    Ok(())
}
