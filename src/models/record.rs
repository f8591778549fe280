use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A progress entry that has not been reported yet.
/// The serde renames match the column headers of the pending CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(rename = "Blok")]
    pub block: String, // ⇔ "Blok" (TEXT, non-empty on accept)
    #[serde(rename = "Tanggal")]
    pub date: NaiveDate, // ⇔ "Tanggal" (TEXT "YYYY-MM-DD")
    #[serde(rename = "Item")]
    pub item: String, // ⇔ "Item" (TEXT, non-empty on accept)
    #[serde(rename = "Prosentase")]
    pub percent: u8, // ⇔ "Prosentase" (INT 0..=100, bounded at the CLI)
    #[serde(rename = "Nilai SPK")]
    pub contract_value: u64, // ⇔ "Nilai SPK" (INT, Rupiah)
}

/// A promoted entry carrying the date it was reported on.
/// Lives in the archive CSV and is never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedRecord {
    #[serde(rename = "Blok")]
    pub block: String,
    #[serde(rename = "Tanggal")]
    pub date: NaiveDate,
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Prosentase")]
    pub percent: u8,
    #[serde(rename = "Nilai SPK")]
    pub contract_value: u64,
    #[serde(rename = "Tanggal_Laporan")]
    pub report_date: NaiveDate,
}

impl ProgressRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl ArchivedRecord {
    /// Promote a pending entry, stamping it with the report date.
    /// The five original fields are carried over unchanged.
    pub fn from_pending(rec: ProgressRecord, report_date: NaiveDate) -> Self {
        Self {
            block: rec.block,
            date: rec.date,
            item: rec.item,
            percent: rec.percent,
            contract_value: rec.contract_value,
            report_date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn report_date_str(&self) -> String {
        self.report_date.format("%Y-%m-%d").to_string()
    }
}
