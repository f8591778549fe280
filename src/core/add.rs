use crate::errors::{AppError, AppResult};
use crate::models::record::ProgressRecord;
use crate::store::Store;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append a new progress entry to the pending dataset.
    ///
    /// Percent and contract value are already bounded by the CLI parser, so
    /// only presence of the two text fields is checked here. A validation
    /// failure performs no write.
    pub fn apply(store: &Store, rec: ProgressRecord) -> AppResult<()> {
        if rec.block.is_empty() || rec.item.is_empty() {
            return Err(AppError::Validation(
                "Block name and work item are both required".into(),
            ));
        }

        let mut pending = store.load_pending()?;
        pending.push(rec);
        store.save_pending(&pending)?;

        success("Progress entry saved");
        Ok(())
    }
}
