//! CSV-backed record stores (pending and archive).
//!
//! Both datasets use full-file overwrite semantics: every mutation loads the
//! whole file, edits the in-memory copy, and rewrites the file from scratch.
//! There is no locking; overlapping writers follow last-writer-wins.

use crate::errors::AppResult;
use crate::models::record::{ArchivedRecord, ProgressRecord};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// File names inside the data directory.
pub const PENDING_FILE: &str = "data_progress.csv";
pub const ARCHIVE_FILE: &str = "data_laporan.csv";

const PENDING_HEADERS: [&str; 5] = ["Blok", "Tanggal", "Item", "Prosentase", "Nilai SPK"];
const ARCHIVE_HEADERS: [&str; 6] = [
    "Blok",
    "Tanggal",
    "Item",
    "Prosentase",
    "Nilai SPK",
    "Tanggal_Laporan",
];

/// Handle on the two flat-file datasets. Handlers receive a `Store` instead
/// of touching paths directly.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store rooted at `dir`, creating the directory and both CSV
    /// files (header row only) on first use.
    pub fn open(dir: &str) -> AppResult<Self> {
        let store = Self {
            dir: PathBuf::from(dir),
        };

        fs::create_dir_all(&store.dir)?;
        ensure_dataset(&store.pending_path(), &PENDING_HEADERS)?;
        ensure_dataset(&store.archive_path(), &ARCHIVE_HEADERS)?;

        Ok(store)
    }

    pub fn pending_path(&self) -> PathBuf {
        self.dir.join(PENDING_FILE)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.dir.join(ARCHIVE_FILE)
    }

    pub fn load_pending(&self) -> AppResult<Vec<ProgressRecord>> {
        let mut rdr = ReaderBuilder::new().from_path(self.pending_path())?;
        let mut out = Vec::new();
        for rec in rdr.deserialize() {
            out.push(rec?);
        }
        Ok(out)
    }

    /// Overwrite the pending file with `records`, preserving their order.
    pub fn save_pending(&self, records: &[ProgressRecord]) -> AppResult<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(self.pending_path())?;
        wtr.write_record(PENDING_HEADERS)?;
        for rec in records {
            wtr.serialize(rec)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn load_archive(&self) -> AppResult<Vec<ArchivedRecord>> {
        let mut rdr = ReaderBuilder::new().from_path(self.archive_path())?;
        let mut out = Vec::new();
        for rec in rdr.deserialize() {
            out.push(rec?);
        }
        Ok(out)
    }

    /// Overwrite the archive file with `records`, preserving their order.
    pub fn save_archive(&self, records: &[ArchivedRecord]) -> AppResult<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(self.archive_path())?;
        wtr.write_record(ARCHIVE_HEADERS)?;
        for rec in records {
            wtr.serialize(rec)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Create an empty dataset (header row only) if the file is absent.
/// The column set is fixed here; there is no schema migration.
fn ensure_dataset(path: &Path, headers: &[&str]) -> AppResult<()> {
    if path.exists() {
        return Ok(());
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(headers)?;
    wtr.flush()?;
    Ok(())
}
