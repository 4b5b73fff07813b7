use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"));
    Ok(())
}

#[test]
fn normalizes_tagged_file() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{
        "amount": {"$type": "Decimal", "value": "99.99"},
        "paidAt": {"$type": "DateTime", "value": "2024-03-01T00:00:00Z"},
        "tags": ["a", "b"],
        "count": 3
    }"#;
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        out,
        serde_json::json!({
            "amount": 99.99,
            "paidAt": "2024-03-01T00:00:00.000Z",
            "tags": ["a", "b"],
            "count": 3
        })
    );
    Ok(())
}

#[test]
fn reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .write_stdin(r#"[{"$type": "BigInt", "value": "12"}]"#)
        .assert()
        .success()
        .stdout("[12]\n");
    Ok(())
}

#[test]
fn strict_mode_fails_on_unknown_tag() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .arg("--strict")
        .write_stdin(r#"{"x": {"$type": "Bytes", "value": "AA=="}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("/x"));
    Ok(())
}

#[test]
fn lenient_mode_passes_unknown_tag_through() -> Result<(), Box<dyn std::error::Error>> {
    let output = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .write_stdin(r#"{"x": {"$type": "Bytes", "value": "AA=="}}"#)
        .output()?;
    assert!(output.status.success());
    let out: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(out, serde_json::json!({"x": {"$type": "Bytes", "value": "AA=="}}));
    Ok(())
}

#[test]
fn missing_input_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .arg("/definitely/not/here.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("opening"));
    Ok(())
}

#[test]
fn clashing_tag_keys_fail() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("jsonsafe-cli"))
        .args(["--type-key", "value"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("type key and value key"));
    Ok(())
}
