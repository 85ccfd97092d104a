use predicates::prelude::*;
use tagtrace_testing::{TestFixture, logs};

#[test]
fn csv_column_by_name_plain_output() {
    let fixture = TestFixture::new();
    let input = fixture.write_log("trees.csv", logs::sample_csv());

    fixture
        .cmd()
        .arg("stats")
        .arg(&input)
        .args(["--column", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Count             4"))
        .stdout(predicate::str::contains("Count (distinct)  2"))
        .stdout(predicate::str::contains("Count (missing)   1"))
        .stdout(predicate::str::contains("Minimum           ash"))
        .stdout(predicate::str::contains("Maximum           birch"));
}

#[test]
fn csv_column_by_index() {
    let fixture = TestFixture::new();
    let input = fixture.write_log("trees.csv", logs::sample_csv());

    fixture
        .cmd()
        .arg("stats")
        .arg(&input)
        .args(["--column", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum           berlin"))
        .stdout(predicate::str::contains("Maximum           paris"));
}

#[test]
fn unknown_csv_column_fails_with_candidates() {
    let fixture = TestFixture::new();
    let input = fixture.write_log("trees.csv", logs::sample_csv());

    fixture
        .cmd()
        .arg("stats")
        .arg(&input)
        .args(["--column", "height"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column 'height' not found"))
        .stderr(predicate::str::contains("id, name, city"));
}

#[test]
fn csv_input_requires_column() {
    let fixture = TestFixture::new();
    let input = fixture.write_log("trees.csv", logs::sample_csv());

    fixture
        .cmd()
        .arg("stats")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--column is required"));
}

#[test]
fn jsonl_field_handles_null_and_numbers() {
    let fixture = TestFixture::new();
    let input = fixture.write_log("records.jsonl", logs::sample_jsonl_records());

    let output = fixture
        .cmd()
        .arg("stats")
        .arg(&input)
        .args(["--field", "name", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 3);
    assert_eq!(parsed["count-missing"], 1);
    assert_eq!(parsed["count-distinct"], 2);
    assert_eq!(parsed["min"], "ash");

    // Numbers are stringified
    let output = fixture
        .cmd()
        .arg("stats")
        .arg(&input)
        .args(["--field", "size", "--format", "json"])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count-missing"], 0);
    assert_eq!(parsed["min"], "12");
    assert_eq!(parsed["max-length"], 2);
}

#[test]
fn stdin_lines_with_blank_as_missing() {
    let fixture = TestFixture::new();

    let output = fixture
        .cmd()
        .args(["stats", "--format", "json"])
        .write_stdin("pine\n\noak\npine\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 4);
    assert_eq!(parsed["count-missing"], 1);
    assert_eq!(parsed["count-distinct"], 2);
    assert_eq!(parsed["min"], "oak");
    assert_eq!(parsed["max"], "pine");
}

#[test]
fn empty_input_reports_null_extremes() {
    let fixture = TestFixture::new();

    let output = fixture
        .cmd()
        .args(["stats", "--format", "json"])
        .write_stdin("")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 0);
    assert_eq!(parsed["min"], serde_json::Value::Null);
    assert_eq!(parsed["min-length"], serde_json::Value::Null);
}

#[test]
fn stat_selection_limits_the_report() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["stats", "--stat", "count", "--stat", "max"])
        .write_stdin("a\nbb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Count"))
        .stdout(predicate::str::contains("Maximum"))
        .stdout(predicate::str::contains("Minimum").not());
}

#[test]
fn unknown_stat_kind_is_a_usage_error() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["stats", "--stat", "median"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown statistic: median"));
}

#[test]
fn csv_format_emits_header_and_values() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["stats", "--format", "csv"])
        .write_stdin("x\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "count,count-distinct,count-missing,min,max,min-length,max-length",
        ))
        .stdout(predicate::str::contains("2,2,0,x,y,1,1"));
}
