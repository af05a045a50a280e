use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn estimator() -> Command {
    Command::cargo_bin("reno-estimator").expect("bin")
}

#[test]
fn estimate_prints_result_table() {
    estimator()
        .args([
            "estimate",
            "--home-value",
            "600000",
            "--yearly-income",
            "85000",
            "--project-type",
            "Kitchen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated Updated Home Value"))
        .stdout(predicate::str::contains("$629,700.00"))
        .stdout(predicate::str::contains("23 months"));
}

#[test]
fn estimate_json_output_is_valid_json() {
    let output = estimator()
        .args([
            "estimate",
            "--home-value",
            "$600,000",
            "--yearly-income",
            "85000",
            "--project-type",
            "Kitchen",
            "--format",
            "json",
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["high"]["roi_percent"], "120.00");
}

#[test]
fn estimate_rejects_invalid_input_with_combined_message() {
    estimator()
        .args([
            "estimate",
            "--home-value",
            "40000",
            "--yearly-income",
            "5000",
            "--project-type",
            "Pool",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("home value must be at least $50,000.00"))
        .stderr(predicate::str::contains("yearly income must be at least $8,000.00"))
        .stderr(predicate::str::contains("'Pool' is not a recognised project type"));
}

#[test]
fn projects_lists_labels() {
    estimator()
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garage Door Replacement"))
        .stdout(predicate::str::contains("ADU"));
}

#[test]
fn config_file_raises_threshold() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[estimator]\nmin_home_value = 700000").unwrap();

    estimator()
        .arg("--config")
        .arg(config.path())
        .args([
            "estimate",
            "--home-value",
            "600000",
            "--yearly-income",
            "85000",
            "--project-type",
            "Kitchen",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least $700,000.00"));
}

#[test]
fn batch_exits_with_status_two_when_rows_are_rejected() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(
        input,
        "home_value,yearly_income,project_type\n600000,85000,Kitchen\n1,1,Kitchen\n"
    )
    .unwrap();

    estimator()
        .args(["batch", "--file"])
        .arg(input.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("1,Kitchen,low,30000.00"))
        .stderr(predicate::str::contains("row 2: "));
}

#[test]
fn rejected_estimate_is_reported_once() {
    let output = estimator()
        .env_remove("RUST_LOG")
        .env("RUST_BACKTRACE", "1")
        .args([
            "estimate",
            "--home-value",
            "40000",
            "--yearly-income",
            "85000",
            "--project-type",
            "Kitchen",
        ])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert_eq!(stderr.matches("please correct the following").count(), 1, "stderr: {stderr}");
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("error: "));
}

#[test]
fn batch_skips_ragged_row_and_reports_each_rejection_once() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(
        input,
        "home_value,yearly_income,project_type\n\
         600000,85000,Kitchen\n\
         600000,85000\n\
         40000,85000,Kitchen\n\
         500000,90000,ADU\n"
    )
    .unwrap();

    let output = estimator()
        .env_remove("RUST_LOG")
        .args(["batch", "--file"])
        .arg(input.path())
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("1,Kitchen,low,"));
    assert!(stdout.contains("4,ADU,low,"));

    let stderr = String::from_utf8(output.stderr).expect("utf8");
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "stderr: {stderr}");
    assert!(lines[0].starts_with("row 2: unreadable row"));
    assert!(lines[1].starts_with("row 3: please correct the following"));
}
