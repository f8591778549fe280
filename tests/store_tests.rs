mod common;
use common::{archive_file, pending_file, plg, setup_data_dir};
use chrono::NaiveDate;
use proglogger::models::record::{ArchivedRecord, ProgressRecord};
use proglogger::store::Store;
use std::fs;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_first_run_creates_empty_datasets_with_headers() {
    let dir = setup_data_dir("store_first_run");

    plg()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No pending entries yet"));

    let pending = fs::read_to_string(pending_file(&dir)).expect("read pending csv");
    assert_eq!(pending.trim_end(), "Blok,Tanggal,Item,Prosentase,Nilai SPK");

    let archive = fs::read_to_string(archive_file(&dir)).expect("read archive csv");
    assert_eq!(
        archive.trim_end(),
        "Blok,Tanggal,Item,Prosentase,Nilai SPK,Tanggal_Laporan"
    );
}

#[test]
fn test_pending_round_trip_preserves_records_and_order() {
    let dir = setup_data_dir("store_pending_round_trip");
    let store = Store::open(&dir).expect("open store");

    let records = vec![
        ProgressRecord {
            block: "B2".into(),
            date: ymd(2025, 9, 2),
            item: "Dinding".into(),
            percent: 60,
            contract_value: 90_000_000,
        },
        ProgressRecord {
            block: "A1".into(),
            date: ymd(2025, 9, 1),
            item: "Pondasi".into(),
            percent: 40,
            contract_value: 150_000_000,
        },
    ];

    store.save_pending(&records).expect("save pending");
    let loaded = store.load_pending().expect("load pending");

    assert_eq!(loaded, records);
}

#[test]
fn test_archive_round_trip_preserves_records_and_order() {
    let dir = setup_data_dir("store_archive_round_trip");
    let store = Store::open(&dir).expect("open store");

    let records = vec![
        ArchivedRecord {
            block: "A1".into(),
            date: ymd(2025, 9, 1),
            item: "Pondasi".into(),
            percent: 40,
            contract_value: 150_000_000,
            report_date: ymd(2025, 9, 10),
        },
        ArchivedRecord {
            block: "A1".into(),
            date: ymd(2025, 9, 3),
            item: "Atap".into(),
            percent: 80,
            contract_value: 75_000_000,
            report_date: ymd(2025, 9, 11),
        },
    ];

    store.save_archive(&records).expect("save archive");
    let loaded = store.load_archive().expect("load archive");

    assert_eq!(loaded, records);
}

#[test]
fn test_save_overwrites_the_whole_file() {
    let dir = setup_data_dir("store_full_overwrite");
    let store = Store::open(&dir).expect("open store");

    let first = vec![ProgressRecord {
        block: "A1".into(),
        date: ymd(2025, 9, 1),
        item: "Pondasi".into(),
        percent: 40,
        contract_value: 150_000_000,
    }];
    store.save_pending(&first).expect("save first");

    // a later save with fewer records must not leave stale rows behind
    store.save_pending(&[]).expect("save empty");
    assert!(store.load_pending().expect("load pending").is_empty());
}

#[test]
fn test_fields_with_commas_survive_round_trip() {
    let dir = setup_data_dir("store_comma_fields");
    let store = Store::open(&dir).expect("open store");

    let records = vec![ProgressRecord {
        block: "A1".into(),
        date: ymd(2025, 9, 1),
        item: "Pondasi, galian tanah".into(),
        percent: 40,
        contract_value: 150_000_000,
    }];

    store.save_pending(&records).expect("save pending");
    assert_eq!(store.load_pending().expect("load pending"), records);
}
