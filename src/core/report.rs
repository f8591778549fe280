use crate::errors::{AppError, AppResult};
use crate::models::record::ArchivedRecord;
use crate::store::Store;
use chrono::NaiveDate;

/// High-level business logic for the `report` command: promote a pending
/// entry into the archive.
pub struct ReportLogic;

impl ReportLogic {
    /// Move the pending entry with 1-based number `no` to the archive,
    /// stamped with `report_date`.
    ///
    /// Two writes happen in order: archive first, then pending. A crash
    /// between them leaves the entry in both files; there is no recovery
    /// path for that window.
    pub fn promote(store: &Store, no: usize, report_date: NaiveDate) -> AppResult<ArchivedRecord> {
        let mut pending = store.load_pending()?;

        if no == 0 || no > pending.len() {
            return Err(AppError::InvalidEntry(no));
        }

        let idx = no - 1;
        let archived = ArchivedRecord::from_pending(pending[idx].clone(), report_date);

        let mut archive = store.load_archive()?;
        archive.push(archived.clone());
        store.save_archive(&archive)?;

        pending.remove(idx);
        store.save_pending(&pending)?;

        Ok(archived)
    }
}
