mod common;
use common::{plg, seed_diverging_archive, setup_data_dir, temp_out};
use std::fs;
use std::path::Path;

#[test]
fn test_export_empty_archive_writes_no_file() {
    let dir = setup_data_dir("export_empty");
    let out = temp_out("export_empty", "xlsx");

    plg()
        .args(["--data-dir", &dir, "export", "--file", &out])
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_writes_xlsx_workbook() {
    let dir = setup_data_dir("export_writes_xlsx");
    seed_diverging_archive(&dir);

    let out = temp_out("export_writes_xlsx", "xlsx");

    plg()
        .args(["--data-dir", &dir, "export", "--file", &out])
        .assert()
        .success()
        .stdout(predicates::str::contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported workbook");
    // XLSX is a zip container
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.len() > 1000);
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let dir = setup_data_dir("export_no_force");
    seed_diverging_archive(&dir);

    let out = temp_out("export_no_force", "xlsx");
    fs::write(&out, b"placeholder").expect("create existing file");

    // stdin is closed, so the overwrite prompt falls through to a refusal
    plg()
        .args(["--data-dir", &dir, "export", "--file", &out])
        .assert()
        .failure();

    let content = fs::read(&out).expect("read untouched file");
    assert_eq!(content, b"placeholder");
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let dir = setup_data_dir("export_force");
    seed_diverging_archive(&dir);

    let out = temp_out("export_force", "xlsx");
    fs::write(&out, b"placeholder").expect("create existing file");

    plg()
        .args(["--data-dir", &dir, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported workbook");
    assert!(bytes.starts_with(b"PK"));
}
