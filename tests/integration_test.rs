use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use assert_cmd::Command;
use chrono::{Local, TimeZone};
use predicates::prelude::*;
use tempfile::tempdir;

fn write_file(path: &Path, len: usize) -> std::io::Result<()> {
    File::create(path)?.write_all(&vec![b'x'; len])
}

#[test]
fn test_default_query() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nlfind")?;
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parsed Query:"))
        .stdout(predicate::str::contains("Max Size: 115343360 KB"))
        .stdout(predicate::str::contains("Modified: \n"))
        .stdout(predicate::str::contains("Year: 2024"));

    Ok(())
}

#[test]
fn test_recency_query() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nlfind")?;
    cmd.args(["photos", "from", "yesterday", "under", "500kb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File Type: photos"))
        .stdout(predicate::str::contains("Max Size: 500 KB"))
        .stdout(predicate::str::contains("Modified: yesterday"))
        .stdout(predicate::str::contains("Year: 0"));

    Ok(())
}

#[test]
fn test_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nlfind")?;
    let output = cmd
        .arg("last month videos under 2 gb")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["file_type"], "videos");
    assert_eq!(value["max_size_kb"], 2 * 1024 * 1024);
    assert_eq!(value["modified"], "last_month");
    assert_eq!(value["year"], 0);

    Ok(())
}

#[test]
fn test_json_with_search_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("nlfind")?;
    cmd.args(["photos", "--json", "--search"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));

    Ok(())
}

#[test]
fn test_debug_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nlfind")?;
    cmd.args(["documents", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File Type: documents"))
        .stdout(predicate::str::contains("Max Size: 0 KB"));

    Ok(())
}

#[test]
fn test_unparseable_query_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nlfind")?;
    cmd.arg("photos\u{1}under 5mb")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to build document"));

    Ok(())
}

#[test]
fn test_search_by_type_and_size() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::create_dir(dir.path().join("workflows"))?;
    write_file(&dir.path().join("workflows").join("ci.yml"), 200)?;
    write_file(&dir.path().join("workflows").join("release.yml"), 5000)?;
    write_file(&dir.path().join("notes.txt"), 10)?;

    let mut cmd = Command::cargo_bin("nlfind")?;
    let output = cmd
        .arg("find workflow under 1kb")
        .arg("--search")
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(stdout.contains("ci.yml"));
    assert!(!stdout.contains("release.yml"));
    assert!(!stdout.contains("notes.txt"));
    assert!(!stdout.contains("Parsed Query:"));

    Ok(())
}

#[test]
fn test_search_by_year() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let old = dir.path().join("beach.jpg");
    let new = dir.path().join("party.jpg");
    write_file(&old, 10)?;
    write_file(&new, 10)?;

    let taken = Local
        .with_ymd_and_hms(2019, 6, 15, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;
    File::options()
        .write(true)
        .open(&old)?
        .set_modified(SystemTime::from(taken))?;

    let mut cmd = Command::cargo_bin("nlfind")?;
    let output = cmd
        .args(["photos", "from", "2019", "--parallel", "--search"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(stdout.contains("beach.jpg"));
    assert!(!stdout.contains("party.jpg"));

    Ok(())
}

#[test]
fn test_search_missing_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing");

    let mut cmd = Command::cargo_bin("nlfind")?;
    cmd.arg("documents")
        .arg("--search")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"));

    Ok(())
}

#[test]
fn test_search_multiple_roots() -> Result<(), Box<dyn std::error::Error>> {
    let first = tempdir()?;
    let second = tempdir()?;
    write_file(&first.path().join("a.log"), 10)?;
    write_file(&second.path().join("b.log"), 10)?;
    write_file(&second.path().join("c.txt"), 10)?;

    let mut cmd = Command::cargo_bin("nlfind")?;
    let output = cmd
        .arg("logs")
        .arg("-s")
        .arg(first.path())
        .arg("-s")
        .arg(second.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(stdout.contains("a.log"));
    assert!(stdout.contains("b.log"));
    assert!(!stdout.contains("c.txt"));

    Ok(())
}
