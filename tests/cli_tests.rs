//! Command-line behaviour of the `postal-ocr` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn postal_ocr() -> Command {
    Command::cargo_bin("postal-ocr").unwrap()
}

fn write_address_list(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("addresses.txt");
    fs::write(
        &path,
        "# reference addresses\n123 main street\n456 oak ave\n\n789 pine rd\n",
    )
    .unwrap();
    path
}

#[test]
fn test_text_command_predicts_address() {
    let dir = TempDir::new().unwrap();
    let addresses = write_address_list(dir.path());

    postal_ocr()
        .args(["text", "123 main st", "--addresses"])
        .arg(&addresses)
        .assert()
        .success()
        .stdout(predicate::str::contains("OCR Reader Results:"))
        .stdout(predicate::str::contains("123 MAIN ST"))
        .stdout(predicate::str::contains("1. 123 MAIN STREET"))
        .stdout(predicate::str::contains("456 OAK AVE").not());
}

#[test]
fn test_text_command_reads_stdin_json() {
    let dir = TempDir::new().unwrap();
    let addresses = write_address_list(dir.path());

    let output = postal_ocr()
        .args(["--format", "json", "text", "-", "--addresses"])
        .arg(&addresses)
        .write_stdin("J Smith\n456 Oak Ave\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recognized_text"], "J SMITH456 OAK AVE");
    assert_eq!(json["matches"][0]["address"], "456 OAK AVE");
    assert_eq!(json["matches"][0]["position"], 1);
    assert_eq!(json["has_overlap"], true);
}

#[test]
fn test_csv_address_list_with_header() {
    let dir = TempDir::new().unwrap();
    let addresses = dir.path().join("addresses.csv");
    fs::write(
        &addresses,
        "number,street,unit,town,county,postcode\n12,Elm Rd,,Leeds,,LS1\n99,Oak Ln,,York,,YO1\n",
    )
    .unwrap();

    postal_ocr()
        .args(["text", "12 ELM RD LEEDS", "--addresses"])
        .arg(&addresses)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 12 ELM RD LEEDS LS1"));
}

#[test]
fn test_score_command() {
    postal_ocr()
        .args(["score", "123 MAIN ST", "123 main street"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Substring boost:            x4 -> 44"))
        .stdout(predicate::str::contains("Composite score:            55"));
}

#[test]
fn test_score_command_rejects_blank_address() {
    postal_ocr()
        .args(["score", "123 MAIN ST", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn test_addresses_export_and_reload() {
    let dir = TempDir::new().unwrap();
    let addresses = write_address_list(dir.path());
    let export = dir.path().join("addresses.json");

    postal_ocr()
        .args(["addresses", "export", "--addresses"])
        .arg(&addresses)
        .arg("--output")
        .arg(&export)
        .assert()
        .success();

    let content = fs::read_to_string(&export).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["addresses"][2], "789 PINE RD");

    postal_ocr()
        .args(["addresses", "list", "--addresses"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 addresses"));
}

#[test]
fn test_scan_with_transcript_engine() {
    let dir = TempDir::new().unwrap();
    let addresses = write_address_list(dir.path());
    let image = dir.path().join("letter.png");
    fs::write(&image, PNG_MAGIC).unwrap();
    fs::write(dir.path().join("letter.png.txt"), "Mrs. P Jones\n789 Pine Rd\n").unwrap();

    postal_ocr()
        .args(["scan", "--engine", "transcript", "--mode", "accurate", "--addresses"])
        .arg(&addresses)
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading image (1/1)..."))
        .stdout(predicate::str::contains("MRS P JONES789 PINE RD"))
        .stdout(predicate::str::contains("1. 789 PINE RD"));
}

#[test]
fn test_scan_continues_after_bad_image() {
    let dir = TempDir::new().unwrap();
    let addresses = write_address_list(dir.path());
    let good = dir.path().join("good.png");
    fs::write(&good, PNG_MAGIC).unwrap();
    fs::write(dir.path().join("good.png.txt"), "456 oak ave\n").unwrap();
    let missing = dir.path().join("missing.png");

    postal_ocr()
        .args(["scan", "--engine", "transcript", "--mode", "quick", "--addresses"])
        .arg(&addresses)
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1. 456 OAK AVE"))
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("1 of 2 images could not be read"));
}

#[test]
fn test_scan_requires_mode() {
    let dir = TempDir::new().unwrap();
    let addresses = write_address_list(dir.path());
    let image = dir.path().join("letter.png");
    fs::write(&image, PNG_MAGIC).unwrap();

    postal_ocr()
        .args(["scan", "--addresses"])
        .arg(&addresses)
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mode"));
}

#[test]
fn test_missing_address_list() {
    postal_ocr()
        .args(["text", "123 MAIN ST", "--addresses", "/nonexistent/addresses.xlsx"])
        .assert()
        .failure();
}
