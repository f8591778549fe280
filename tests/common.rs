#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plg() -> Command {
    cargo_bin_cmd!("proglogger")
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftovers from previous runs
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_proglogger", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn pending_file(dir: &str) -> String {
    format!("{}/data_progress.csv", dir)
}

pub fn archive_file(dir: &str) -> String {
    format!("{}/data_laporan.csv", dir)
}

/// Add one pending entry via the CLI
pub fn add_entry(dir: &str, blok: &str, item: &str, date: &str, percent: &str, value: &str) {
    plg()
        .args([
            "--data-dir",
            dir,
            "add",
            "--blok",
            blok,
            "--item",
            item,
            "--date",
            date,
            "--percent",
            percent,
            "--value",
            value,
        ])
        .assert()
        .success();
}

/// Promote pending entry `no` via the CLI
pub fn report_entry(dir: &str, no: &str) {
    plg()
        .args(["--data-dir", dir, "report", no])
        .assert()
        .success();
}

/// Seed an archive where the mean-of-means diverges from the per-record
/// mean: blok A {20, 40} → 30, blok B {90} → 90, overall 60 (not 50)
pub fn seed_diverging_archive(dir: &str) {
    add_entry(dir, "A", "Pondasi", "2025-08-01", "20", "100000000");
    add_entry(dir, "A", "Dinding", "2025-08-02", "40", "50000000");
    add_entry(dir, "B", "Atap", "2025-08-03", "90", "75000000");

    // promote all three (always the first pending entry)
    report_entry(dir, "1");
    report_entry(dir, "1");
    report_entry(dir, "1");
}

/// Count data rows (excluding the header) of a CSV file
pub fn count_rows(file: &str) -> usize {
    let content = fs::read_to_string(file).expect("read csv");
    content.lines().count().saturating_sub(1)
}
